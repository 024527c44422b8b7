//! Small readers for ASN.1 types that yasna has no direct method for, or that
//! appear as a CHOICE of several universal types.

use time::format_description::well_known::Rfc2822;
use time::OffsetDateTime;
use yasna::models::ObjectIdentifier;
use yasna::tags::{TAG_BMPSTRING, TAG_TELETEXSTRING, TAG_UNIVERSALSTRING};
use yasna::{ASN1Error, ASN1ErrorKind, ASN1Result, BERReader, BERReaderSeq, Tag, TagClass};

const fn universal(tag_number: u64) -> Tag {
	Tag {
		tag_class: TagClass::Universal,
		tag_number,
	}
}

pub(crate) const TAG_INTEGER: Tag = universal(2);
pub(crate) const TAG_UTF8STRING: Tag = universal(12);
pub(crate) const TAG_NUMERICSTRING: Tag = universal(18);
pub(crate) const TAG_PRINTABLESTRING: Tag = universal(19);
pub(crate) const TAG_IA5STRING: Tag = universal(22);
pub(crate) const TAG_UTCTIME: Tag = universal(23);
pub(crate) const TAG_GENERALIZEDTIME: Tag = universal(24);
pub(crate) const TAG_VISIBLESTRING: Tag = universal(26);
pub(crate) const TAG_GENERALSTRING: Tag = universal(27);

pub(crate) fn invalid() -> ASN1Error {
	ASN1Error::new(ASN1ErrorKind::Invalid)
}

/// Reads any of the character string types used in certificates.
///
/// Covers the DirectoryString and DisplayText choices as well as the loose
/// string types some vendors put into their extensions.
pub(crate) fn read_string(reader: BERReader<'_, '_>) -> ASN1Result<String> {
	let tag = reader.lookahead_tag()?;
	if tag == TAG_UTF8STRING {
		reader.read_utf8string()
	} else if tag == TAG_PRINTABLESTRING {
		reader.read_printable_string()
	} else if tag == TAG_IA5STRING {
		reader.read_ia5_string()
	} else if tag == TAG_BMPSTRING {
		let bytes = reader.read_tagged_implicit(TAG_BMPSTRING, |r| r.read_bytes())?;
		decode_ucs2(&bytes)
	} else if tag == TAG_UNIVERSALSTRING {
		let bytes = reader.read_tagged_implicit(TAG_UNIVERSALSTRING, |r| r.read_bytes())?;
		decode_ucs4(&bytes)
	} else if tag == TAG_TELETEXSTRING
		|| tag == TAG_NUMERICSTRING
		|| tag == TAG_VISIBLESTRING
		|| tag == TAG_GENERALSTRING
	{
		// T.61 and GeneralString are treated as Latin-1, the others are ASCII subsets
		let bytes = reader.read_tagged_implicit(tag, |r| r.read_bytes())?;
		Ok(bytes.iter().map(|&b| char::from(b)).collect())
	} else {
		Err(invalid())
	}
}

fn decode_ucs2(bytes: &[u8]) -> ASN1Result<String> {
	if bytes.len() % 2 != 0 {
		return Err(invalid());
	}
	let units = bytes
		.chunks(2)
		.map(|c| u16::from_be_bytes([c[0], c[1]]))
		.collect::<Vec<_>>();
	String::from_utf16(&units).map_err(|_| invalid())
}

fn decode_ucs4(bytes: &[u8]) -> ASN1Result<String> {
	if bytes.len() % 4 != 0 {
		return Err(invalid());
	}
	bytes
		.chunks(4)
		.map(|c| char::from_u32(u32::from_be_bytes([c[0], c[1], c[2], c[3]])).ok_or_else(invalid))
		.collect()
}

/// Reads a `Time ::= CHOICE { utcTime UTCTime, generalTime GeneralizedTime }`.
pub(crate) fn read_time(reader: BERReader<'_, '_>) -> ASN1Result<OffsetDateTime> {
	let tag = reader.lookahead_tag()?;
	if tag == TAG_UTCTIME {
		reader.read_utctime().map(|t| *t.datetime())
	} else if tag == TAG_GENERALIZEDTIME {
		reader.read_generalized_time().map(|t| *t.datetime())
	} else {
		Err(invalid())
	}
}

pub(crate) fn read_generalized_time(reader: BERReader<'_, '_>) -> ASN1Result<OffsetDateTime> {
	reader.read_generalized_time().map(|t| *t.datetime())
}

pub(crate) fn format_time(time: &OffsetDateTime) -> String {
	// RFC 2822 cannot express years before 1900
	time.format(&Rfc2822).unwrap_or_else(|_| time.to_string())
}

/// Reads an INTEGER and returns its magnitude as big-endian bytes.
pub(crate) fn read_integer_bytes(reader: BERReader<'_, '_>) -> ASN1Result<Vec<u8>> {
	reader.read_bigint_bytes().map(|(bytes, _non_negative)| bytes)
}

/// Collects the DER encodings of every element left in a sequence.
pub(crate) fn read_remaining(seq: &mut BERReaderSeq<'_, '_>) -> ASN1Result<Vec<u8>> {
	let mut out = Vec::new();
	while let Some(der) = seq.read_optional(|r| r.read_der())? {
		out.extend_from_slice(&der);
	}
	Ok(out)
}

/// Reads a SEQUENCE OF OBJECT IDENTIFIER.
pub(crate) fn read_oid_sequence(reader: BERReader<'_, '_>) -> ASN1Result<Vec<ObjectIdentifier>> {
	let mut oids = Vec::new();
	reader.read_sequence_of(|r| {
		oids.push(r.read_oid()?);
		Ok(())
	})?;
	Ok(oids)
}

/// Named bits are numbered from the most significant bit of the first byte.
pub(crate) fn bit_is_set(bytes: &[u8], bit: usize) -> bool {
	bytes
		.get(bit / 8)
		.map_or(false, |b| b & (0x80 >> (bit % 8)) != 0)
}

/// Base 2 rendering of the unsigned number formed by `bytes`.
pub(crate) fn binary_string(bytes: &[u8]) -> String {
	let digits: String = bytes.iter().map(|b| format!("{:08b}", b)).collect();
	let trimmed = digits.trim_start_matches('0');
	if trimmed.is_empty() {
		"0".to_string()
	} else {
		trimmed.to_string()
	}
}

#[cfg(test)]
mod der_tests {
	use super::*;

	#[test]
	fn reads_string_choices() {
		let utf8 = yasna::construct_der(|w| w.write_utf8_string("Grüße"));
		assert_eq!(yasna::parse_der(&utf8, read_string).unwrap(), "Grüße");

		let printable = yasna::construct_der(|w| w.write_printable_string("Crab SE"));
		assert_eq!(yasna::parse_der(&printable, read_string).unwrap(), "Crab SE");

		let bmp = yasna::construct_der(|w| {
			w.write_tagged_implicit(TAG_BMPSTRING, |w| w.write_bytes(&[0x00, 0x55, 0x00, 0x73]))
		});
		assert_eq!(yasna::parse_der(&bmp, read_string).unwrap(), "Us");
	}

	#[test]
	fn rejects_non_strings() {
		let int = yasna::construct_der(|w| w.write_u32(5));
		assert!(yasna::parse_der(&int, read_string).is_err());
	}

	#[test]
	fn named_bits() {
		// bits 0 and 5
		let bytes = [0b1000_0100];
		assert!(bit_is_set(&bytes, 0));
		assert!(!bit_is_set(&bytes, 1));
		assert!(bit_is_set(&bytes, 5));
		assert!(!bit_is_set(&bytes, 8));
	}

	#[test]
	fn binary() {
		assert_eq!(binary_string(&[0x00, 0x05]), "101");
		assert_eq!(binary_string(&[]), "0");
	}
}
