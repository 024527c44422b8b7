//! Certificate policy extensions.

use yasna::{ASN1Result, BERReaderSeq, Tag};

use crate::hex::hex_string;
use crate::names;
use crate::oid::{self, OID_QT_CPS, OID_QT_UNOTICE};
use crate::render::der::{read_remaining, read_string};
use crate::render::Lines;

pub(super) fn certificate_policies(out: &mut Lines<'_>, value: &[u8]) -> ASN1Result<()> {
	yasna::parse_der(value, |r| {
		let mut policy = 0;
		r.read_sequence_of(|r| {
			r.read_sequence(|seq| {
				let policy_id = seq.next().read_oid()?;
				policy += 1;
				out.line(0, format!("Certificate Policy [{}]:", policy));
				out.line(1, format!("Policy Identifier: {}", oid::to_dotted(&policy_id)));
				seq.read_optional(|r| {
					let mut qualifier = 0;
					r.read_sequence_of(|r| {
						r.read_sequence(|seq| {
							qualifier += 1;
							out.line(
								1,
								format!("Policy Qualifier Information [{},{}]:", policy, qualifier),
							);
							policy_qualifier_info(out, seq)
						})
					})
				})?;
				Ok(())
			})
		})
	})
}

fn policy_qualifier_info(out: &mut Lines<'_>, seq: &mut BERReaderSeq<'_, '_>) -> ASN1Result<()> {
	let qualifier_id = seq.next().read_oid()?;
	match qualifier_id.components().as_slice() {
		OID_QT_CPS => {
			let uri = seq.next().read_ia5_string()?;
			if out.opts().link_uris {
				out.line(2, format!("CPS Pointer: <a href=\"{0}\">{0}</a>", uri));
			} else {
				out.line(2, format!("CPS Pointer: {}", uri));
			}
		},
		OID_QT_UNOTICE => {
			out.line(2, "User Notice:");
			seq.next().read_sequence(|seq| user_notice(out, seq))?;
		},
		_ => {
			let qualifier = read_remaining(seq)?;
			let name = names::policy_qualifier(qualifier_id.components())
				.map(str::to_string)
				.unwrap_or_else(|| oid::to_dotted(&qualifier_id));
			out.line(2, name);
			if !qualifier.is_empty() {
				out.line(2, hex_string(&qualifier));
			}
		},
	}
	Ok(())
}

/// `UserNotice ::= SEQUENCE { noticeRef NoticeReference OPTIONAL, explicitText DisplayText OPTIONAL }`
fn user_notice(out: &mut Lines<'_>, seq: &mut BERReaderSeq<'_, '_>) -> ASN1Result<()> {
	// NoticeReference is the only SEQUENCE alternative, DisplayText is always a string
	let notice_ref = seq.read_optional(|r| {
		r.read_sequence(|seq| {
			let organization = read_string(seq.next())?;
			let mut numbers = Vec::new();
			seq.next().read_sequence_of(|r| {
				numbers.push(r.read_i64()?.to_string());
				Ok(())
			})?;
			Ok((organization, numbers))
		})
	})?;
	let explicit_text = seq.read_optional(read_string)?;

	if let Some((organization, numbers)) = notice_ref {
		out.line(3, "Notice Reference:");
		out.line(4, format!("Organization: {}", organization));
		out.line(4, format!("Notice Numbers: {}", numbers.join(", ")));
	}
	if let Some(text) = explicit_text {
		out.line(3, format!("Explicit Text: {}", text));
	}
	Ok(())
}

pub(super) fn policy_mappings(out: &mut Lines<'_>, value: &[u8]) -> ASN1Result<()> {
	yasna::parse_der(value, |r| {
		let mut n = 0;
		r.read_sequence_of(|r| {
			r.read_sequence(|seq| {
				let issuer_domain = seq.next().read_oid()?;
				let subject_domain = seq.next().read_oid()?;
				n += 1;
				out.line(0, format!("Policy Mapping [{}]:", n));
				out.line(1, format!("Issuer Domain Policy: {}", oid::to_dotted(&issuer_domain)));
				out.line(1, format!("Subject Domain Policy: {}", oid::to_dotted(&subject_domain)));
				Ok(())
			})
		})
	})
}

pub(super) fn policy_constraints(out: &mut Lines<'_>, value: &[u8]) -> ASN1Result<()> {
	let (require, inhibit) = yasna::parse_der(value, |r| {
		r.read_sequence(|seq| {
			let require =
				seq.read_optional(|r| r.read_tagged_implicit(Tag::context(0), |r| r.read_u64()))?;
			let inhibit =
				seq.read_optional(|r| r.read_tagged_implicit(Tag::context(1), |r| r.read_u64()))?;
			Ok((require, inhibit))
		})
	})?;
	if let Some(skip) = require {
		out.line(0, format!("Require Explicit Policy: {}", skip));
	}
	if let Some(skip) = inhibit {
		out.line(0, format!("Inhibit Policy Mapping: {}", skip));
	}
	Ok(())
}

pub(super) fn inhibit_any_policy(out: &mut Lines<'_>, value: &[u8]) -> ASN1Result<()> {
	let skip = yasna::parse_der(value, |r| r.read_u64())?;
	out.line(0, format!("Skip Certs: {}", skip));
	Ok(())
}

#[cfg(test)]
mod policy_tests {
	use super::*;
	use crate::render::RenderOptions;
	use yasna::models::ObjectIdentifier;

	#[test]
	fn cps_and_user_notice() {
		let value = yasna::construct_der(|w| {
			w.write_sequence(|w| {
				w.next().write_sequence(|w| {
					w.next()
						.write_oid(&ObjectIdentifier::from_slice(&[2, 23, 140, 1, 2, 1]));
					w.next().write_sequence(|w| {
						w.next().write_sequence(|w| {
							w.next().write_oid(&ObjectIdentifier::from_slice(OID_QT_CPS));
							w.next().write_ia5_string("https://cps.example");
						});
						w.next().write_sequence(|w| {
							w.next().write_oid(&ObjectIdentifier::from_slice(OID_QT_UNOTICE));
							w.next().write_sequence(|w| {
								w.next().write_sequence(|w| {
									w.next().write_utf8_string("Crabs");
									w.next().write_sequence(|w| {
										w.next().write_u8(1);
										w.next().write_u8(2);
									});
								});
								w.next().write_utf8_string("Be nice");
							});
						});
					});
				});
			})
		});
		let opts = RenderOptions::default();
		let mut out = Lines::new(&opts);
		certificate_policies(&mut out, &value).unwrap();
		assert_eq!(
			out.finish(),
			"Certificate Policy [1]:\n\
			\x20   Policy Identifier: 2.23.140.1.2.1\n\
			\x20   Policy Qualifier Information [1,1]:\n\
			\x20       CPS Pointer: https://cps.example\n\
			\x20   Policy Qualifier Information [1,2]:\n\
			\x20       User Notice:\n\
			\x20           Notice Reference:\n\
			\x20               Organization: Crabs\n\
			\x20               Notice Numbers: 1, 2\n\
			\x20           Explicit Text: Be nice\n"
		);
	}

	#[test]
	fn policy_constraints_fields() {
		let value = yasna::construct_der(|w| {
			w.write_sequence(|w| {
				w.next()
					.write_tagged_implicit(Tag::context(1), |w| w.write_u8(2));
			})
		});
		let opts = RenderOptions::default();
		let mut out = Lines::new(&opts);
		policy_constraints(&mut out, &value).unwrap();
		assert_eq!(out.finish(), "Inhibit Policy Mapping: 2\n");
	}
}
