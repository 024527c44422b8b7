#![warn(missing_docs)]
//! Command line access to the `x509ext` crate: render the extensions of
//! certificates, requests and extension set files, and maintain the key
//! identifiers stored in extension set files.

use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use x509ext::{ExtensionSet, Issuer, PublicKey, RenderOptions};

/// A specialized `Result` type.
pub type Result<T> = std::result::Result<T, Error>;
/// This is defined as a convenience.
pub type Error = Box<dyn std::error::Error + Send + Sync>;

const PEM_CSR_TAGS: [&str; 2] = ["CERTIFICATE REQUEST", "NEW CERTIFICATE REQUEST"];

/// The contents of a file that is either PEM or raw DER.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Input {
	/// The PEM label, `None` for DER input.
	pub tag: Option<String>,
	/// The DER bytes.
	pub der: Vec<u8>,
}

impl Input {
	/// Reads `path`, decoding PEM if the file starts with a PEM header.
	pub fn read(path: &Path) -> Result<Self> {
		let bytes = fs::read(path)?;
		Self::from_bytes(bytes)
	}

	fn from_bytes(bytes: Vec<u8>) -> Result<Self> {
		let trimmed = bytes
			.iter()
			.position(|b| !b.is_ascii_whitespace())
			.map_or(&bytes[..], |start| &bytes[start..]);
		if trimmed.starts_with(b"-----BEGIN") {
			let pem = pem::parse(trimmed)?;
			return Ok(Input {
				tag: Some(pem.tag().to_string()),
				der: pem.into_contents(),
			});
		}
		Ok(Input { tag: None, der: bytes })
	}

	fn is_csr(&self) -> bool {
		self.tag
			.as_deref()
			.map_or(false, |tag| PEM_CSR_TAGS.contains(&tag))
	}
}

/// Builds an extension set from a certificate or certificate signing
/// request. DER input is tried as a certificate first.
pub fn read_extensions(path: &Path) -> Result<ExtensionSet> {
	let input = Input::read(path)?;
	if input.is_csr() {
		return Ok(ExtensionSet::from_csr_der(&input.der)?);
	}
	match ExtensionSet::from_certificate_der(&input.der) {
		Ok(set) => Ok(set),
		Err(err) if input.tag.is_none() => {
			tracing::debug!(%err, "not a certificate, trying a certificate request");
			Ok(ExtensionSet::from_csr_der(&input.der)?)
		},
		Err(err) => Err(err.into()),
	}
}

/// Reads a public key from a SubjectPublicKeyInfo, certificate or CSR.
pub fn read_public_key(path: &Path) -> Result<PublicKey> {
	let input = Input::read(path)?;
	match input.tag.as_deref() {
		Some("PUBLIC KEY") => Ok(PublicKey::from_spki_der(&input.der)?),
		Some("CERTIFICATE") => Ok(Issuer::from_certificate_der(&input.der)?.public_key),
		Some(tag) if PEM_CSR_TAGS.contains(&tag) => csr_public_key(&input.der),
		Some(tag) => Err(format!("unsupported PEM label {:?} in {}", tag, path.display()).into()),
		None => PublicKey::from_spki_der(&input.der)
			.or_else(|_| Issuer::from_certificate_der(&input.der).map(|i| i.public_key))
			.or_else(|_| csr_public_key(&input.der)),
	}
}

fn csr_public_key(der: &[u8]) -> Result<PublicKey> {
	use x509_parser::prelude::FromDer;
	let (_, csr) = x509_parser::certification_request::X509CertificationRequest::from_der(der)
		.map_err(|_| x509ext::Error::CouldNotParseCertificationRequest)?;
	Ok(PublicKey::from_raw(
		csr.certification_request_info
			.subject_pki
			.subject_public_key
			.data
			.to_vec(),
	))
}

/// Reads the issuer details from the issuer's certificate, PEM or DER.
pub fn read_issuer(path: &Path) -> Result<Issuer> {
	let input = Input::read(path)?;
	Ok(Issuer::from_certificate_der(&input.der)?)
}

/// Renders every extension of `set` under a heading line carrying its
/// name, OID and criticality.
pub fn describe(set: &ExtensionSet, opts: &RenderOptions) -> Result<String> {
	let mut out = String::new();
	for ext in set.iter() {
		let name = ext.name().unwrap_or("Unknown Extension");
		let critical = if ext.is_critical() { " critical" } else { "" };
		writeln!(out, "{} ({}){}:", name, ext.oid(), critical)?;
		let body = ext.string_value_with(opts)?;
		for line in body.lines() {
			writeln!(out, "{}{}", opts.indent, line)?;
		}
	}
	Ok(out)
}
