//! Human readable rendering of extension values.
//!
//! Every extension type with a known structure has a decoder that writes one
//! item per line, nesting with a fixed indent. Everything else is shown as a
//! hex dump.

use std::fmt::Display;

use crate::ext_type::ExtensionType;
use crate::hex::hex_clear_dump;
use crate::Error;

mod common_pki;
mod crl;
pub(crate) mod der;
pub(crate) mod general_name;
pub(crate) mod name;
pub(crate) mod pkix;
mod policy;
mod qualified;
mod vendor;

pub use crl::RevocationReason;

/// Tweaks to how [`X509Ext::string_value_with`] lays out its output.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub struct RenderOptions {
	/// Wrap URIs found in general names and CPS pointers in an HTML anchor.
	///
	/// Defaults to `false`.
	pub link_uris: bool,
	/// The string used once per nesting level.
	///
	/// Defaults to four spaces.
	pub indent: &'static str,
}

impl Default for RenderOptions {
	fn default() -> Self {
		RenderOptions {
			link_uris: false,
			indent: "    ",
		}
	}
}

impl RenderOptions {
	/// Sets whether URIs are rendered as HTML links
	pub fn with_link_uris(mut self, link_uris: bool) -> Self {
		self.link_uris = link_uris;
		self
	}
	/// Sets the string used for one level of indentation
	pub fn with_indent(mut self, indent: &'static str) -> Self {
		self.indent = indent;
		self
	}
}

/// Output buffer of a decoder.
pub(crate) struct Lines<'o> {
	text: String,
	opts: &'o RenderOptions,
}

impl<'o> Lines<'o> {
	fn new(opts: &'o RenderOptions) -> Self {
		Lines {
			text: String::new(),
			opts,
		}
	}

	/// Appends `content` at nesting level `depth`, terminated by a newline.
	pub(crate) fn line(&mut self, depth: usize, content: impl Display) {
		for _ in 0..depth {
			self.text.push_str(self.opts.indent);
		}
		self.text.push_str(&content.to_string());
		self.text.push('\n');
	}

	/// Appends `content` without indentation or line break.
	pub(crate) fn raw(&mut self, content: &str) {
		self.text.push_str(content);
	}

	pub(crate) fn opts(&self) -> &'o RenderOptions {
		self.opts
	}

	fn finish(self) -> String {
		self.text
	}
}

/// A single extension: its object identifier, its DER encoded value and
/// whether it is marked critical.
///
/// The value is the OCTET STRING that carries the extension specific structure,
/// encoding included.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct X509Ext {
	oid: String,
	value: Vec<u8>,
	critical: bool,
}

impl X509Ext {
	/// Creates the view of one extension
	pub fn new(oid: impl Into<String>, value: impl Into<Vec<u8>>, critical: bool) -> Self {
		X509Ext {
			oid: oid.into(),
			value: value.into(),
			critical,
		}
	}

	/// The dotted object identifier
	pub fn oid(&self) -> &str {
		&self.oid
	}

	/// The OCTET STRING encoding of the value
	pub fn value(&self) -> &[u8] {
		&self.value
	}

	/// Whether the extension is marked critical
	pub fn is_critical(&self) -> bool {
		self.critical
	}

	/// The display name of the extension type, if the object identifier is known.
	pub fn name(&self) -> Option<&'static str> {
		crate::ext_type::friendly_name(&self.oid)
	}

	/// The known extension type, if any.
	pub fn extension_type(&self) -> Option<ExtensionType> {
		ExtensionType::resolve_oid(&self.oid)
	}

	/// Renders the value with the default [`RenderOptions`].
	pub fn string_value(&self) -> Result<String, Error> {
		self.string_value_with(&RenderOptions::default())
	}

	/// Renders the value as multi-line text.
	///
	/// Fails with [`Error::Decode`] if the value is not an OCTET STRING, or if
	/// its content does not match the structure of a known extension type.
	pub fn string_value_with(&self, opts: &RenderOptions) -> Result<String, Error> {
		let octets = yasna::parse_der(&self.value, |r| r.read_bytes())?;
		let mut out = Lines::new(opts);
		let Some(ty) = self.extension_type() else {
			tracing::debug!(oid = %self.oid, "unknown extension, rendering hex dump");
			out.raw(&hex_clear_dump(&octets));
			return Ok(out.finish());
		};
		decode(ty, &octets, &mut out).map_err(|e| {
			tracing::debug!(oid = %self.oid, error = %e, "extension value does not decode");
			Error::from(e)
		})?;
		Ok(out.finish())
	}
}

/// Renders the extension `value` (an OCTET STRING) of type `oid` with the
/// default [`RenderOptions`].
pub fn render(oid: &str, value: &[u8]) -> Result<String, Error> {
	X509Ext::new(oid, value, false).string_value()
}

fn decode(ty: ExtensionType, value: &[u8], out: &mut Lines<'_>) -> yasna::ASN1Result<()> {
	use ExtensionType::*;
	match ty {
		EntrustVersionInformation => vendor::entrust_version_information(out, value),
		AuthorityInformationAccess => {
			pkix::information_access(out, value, "Authority Information Access")
		},
		SubjectInformationAccess => pkix::information_access(out, value, "Subject Information Access"),
		SubjectDirectoryAttributes => pkix::subject_directory_attributes(out, value),
		SubjectKeyIdentifier => pkix::subject_key_identifier(out, value),
		KeyUsage => pkix::key_usage(out, value),
		PrivateKeyUsagePeriod => pkix::private_key_usage_period(out, value),
		SubjectAlternativeName | IssuerAlternativeName | CertificateIssuer => {
			pkix::general_names(out, value)
		},
		BasicConstraints => pkix::basic_constraints(out, value),
		CrlNumber | DeltaCrlIndicator => crl::crl_number(out, value),
		ReasonCode => crl::reason_code(out, value),
		HoldInstructionCode => crl::hold_instruction_code(out, value),
		InvalidityDate => crl::invalidity_date(out, value),
		IssuingDistributionPoint => crl::issuing_distribution_point(out, value),
		NameConstraints => pkix::name_constraints(out, value),
		CrlDistributionPoints => crl::distribution_points(out, value, "CRL Distribution Point"),
		FreshestCrl => crl::distribution_points(out, value, "Freshest CRL Distribution Point"),
		CertificatePolicies => policy::certificate_policies(out, value),
		PolicyMappings => policy::policy_mappings(out, value),
		AuthorityKeyIdentifier => pkix::authority_key_identifier(out, value),
		PolicyConstraints => policy::policy_constraints(out, value),
		ExtendedKeyUsage => pkix::extended_key_usage(out, value),
		InhibitAnyPolicy => policy::inhibit_any_policy(out, value),
		NetscapeCertificateType => vendor::netscape_certificate_type(out, value),
		NetscapeBaseUrl
		| NetscapeRevocationUrl
		| NetscapeCaRevocationUrl
		| NetscapeCertificateRenewalUrl
		| NetscapeCaPolicyUrl
		| NetscapeSslServerName
		| NetscapeComment => vendor::ia5_string(out, value),
		BiometricInfo => qualified::biometric_info(out, value),
		QcStatements => qualified::qc_statements(out, value),
		OcspNoCheck => pkix::ocsp_no_check(out, value),
		LiabilityLimitationFlag => common_pki::liability_limitation_flag(out, value),
		DateOfCertGen => common_pki::date_of_cert_gen(out, value),
		Procuration => common_pki::procuration(out, value),
		Admission => common_pki::admission(out, value),
		MonetaryLimit => common_pki::monetary_limit(out, value),
		DeclarationOfMajority => common_pki::declaration_of_majority(out, value),
		Iccsn => common_pki::iccsn(out, value),
		Restriction | AdditionalInformation => common_pki::directory_string(out, value),
		ValidityModel => common_pki::validity_model(out, value),
		MsEnrollCertTypeExtension => vendor::ms_certificate_type(out, value),
		MsCaVersion => vendor::ms_ca_version(out, value),
		MsCrlNextPublish => vendor::ms_crl_next_publish(out, value),
		MsCertificateTemplate => vendor::ms_certificate_template(out, value),
		SmimeCapabilities => vendor::smime_capabilities(out, value),
		VsCzag | VsFidelityToken | VsInBoxV1 | VsInBoxV2 | VsSerialNumberRollover
		| VsOnSiteJurisdictionHash => vendor::ia5_string(out, value),
		VsTokenType | VsUnknown => vendor::bit_string_binary(out, value),
		VsNonVerified => vendor::verisign_non_verified(out, value),
		_ => {
			out.raw(&hex_clear_dump(value));
			Ok(())
		},
	}
}

#[cfg(test)]
mod render_tests {
	use super::*;

	#[test]
	fn unknown_oid_is_hex_dump() {
		let value = yasna::construct_der(|w| w.write_bytes(&[0x30, 0x03, 0x02, 0x01, 0x05]));
		let text = render("1.2.3.4.5.6.7.8.9.0", &value).unwrap();
		assert_eq!(text, hex_clear_dump(&[0x30, 0x03, 0x02, 0x01, 0x05]));
	}

	#[test]
	fn value_must_be_octet_string() {
		let not_octets = yasna::construct_der(|w| w.write_u8(1));
		assert!(matches!(
			render("2.5.29.15", &not_octets),
			Err(Error::Decode(_))
		));
	}

	#[test]
	fn custom_indent() {
		let inner = yasna::construct_der(|w| {
			w.write_sequence(|w| {
				w.next().write_sequence(|w| {
					w.next()
						.write_oid(&yasna::models::ObjectIdentifier::from_slice(&[2, 5, 29, 32, 0]));
				});
			})
		});
		let value = yasna::construct_der(|w| w.write_bytes(&inner));
		let ext = X509Ext::new("2.5.29.32", value, false);
		let opts = RenderOptions::default().with_indent("\t");
		assert_eq!(
			ext.string_value_with(&opts).unwrap(),
			"Certificate Policy [1]:\n\tPolicy Identifier: 2.5.29.32.0\n"
		);
	}
}
