use std::collections::{HashMap, HashSet};
use std::fs::File;
use std::io::{self, BufReader, BufWriter, Read, Write};
use std::path::Path;

use yasna::models::ObjectIdentifier;

#[cfg(all(feature = "pem", feature = "x509-parser"))]
use crate::error::ExternalError;
use crate::ext::{self, Criticality, Extension};
use crate::{oid, Error, LoadError, X509Ext};

/// Leading magic number of a persisted extension set.
const MAGIC_NUMBER: i64 = 0x47911131;
/// The only format version written and understood.
const FORMAT_VERSION: i32 = 1;

/// A set of X.509 extensions, partitioned into critical and non-critical ones.
///
/// Extensions are keyed by their dotted object identifier; an identifier is in
/// at most one of the two partitions. Values are the DER encoded extnValue
/// OCTET STRING, encoding included.
///
/// ```
/// # use x509ext::ExtensionSet;
/// let mut set = ExtensionSet::new();
/// set.add_extension("2.5.29.19", true, vec![0x04, 0x02, 0x30, 0x00]);
/// set.toggle_extension_criticality("2.5.29.19");
/// assert!(set.non_critical_extension_oids().contains("2.5.29.19"));
/// assert!(!set.is_critical("2.5.29.19"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtensionSet {
	critical: HashMap<String, Vec<u8>>,
	non_critical: HashMap<String, Vec<u8>>,
}

impl ExtensionSet {
	/// Creates an empty extension set
	pub fn new() -> Self {
		Self::default()
	}

	/// Adds an extension, replacing any extension with the same identifier
	/// in either partition.
	pub fn add_extension(
		&mut self,
		oid: impl Into<String>,
		critical: bool,
		value: impl Into<Vec<u8>>,
	) {
		let oid = oid.into();
		self.remove_extension(&oid);
		if critical {
			self.critical.insert(oid, value.into());
		} else {
			self.non_critical.insert(oid, value.into());
		}
	}

	/// Removes the extension with identifier `oid`, if present.
	pub fn remove_extension(&mut self, oid: &str) {
		self.critical.remove(oid);
		self.non_critical.remove(oid);
	}

	/// Moves the extension with identifier `oid` to the other partition,
	/// keeping its value. Does nothing if the extension is not present.
	pub fn toggle_extension_criticality(&mut self, oid: &str) {
		if let Some(value) = self.critical.remove(oid) {
			self.non_critical.insert(oid.to_string(), value);
		} else if let Some(value) = self.non_critical.remove(oid) {
			self.critical.insert(oid.to_string(), value);
		}
	}

	/// The extnValue OCTET STRING of the extension with identifier `oid`
	pub fn get_extension_value(&self, oid: &str) -> Option<&[u8]> {
		self.critical
			.get(oid)
			.or_else(|| self.non_critical.get(oid))
			.map(Vec::as_slice)
	}

	/// The identifiers of all critical extensions
	pub fn critical_extension_oids(&self) -> HashSet<String> {
		self.critical.keys().cloned().collect()
	}

	/// The identifiers of all non-critical extensions
	pub fn non_critical_extension_oids(&self) -> HashSet<String> {
		self.non_critical.keys().cloned().collect()
	}

	/// Whether `oid` is present and marked critical
	pub fn is_critical(&self, oid: &str) -> bool {
		self.critical.contains_key(oid)
	}

	/// Whether an extension with identifier `oid` is present
	pub fn contains(&self, oid: &str) -> bool {
		self.critical.contains_key(oid) || self.non_critical.contains_key(oid)
	}

	/// The number of extensions in both partitions
	pub fn len(&self) -> usize {
		self.critical.len() + self.non_critical.len()
	}

	/// Whether the set holds no extension at all
	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}

	/// Iterates over the extensions, critical ones first, each partition
	/// ordered by identifier.
	pub fn iter(&self) -> impl Iterator<Item = X509Ext> + '_ {
		sorted(&self.critical)
			.into_iter()
			.map(|(oid, value)| X509Ext::new(oid, value.as_slice(), true))
			.chain(
				sorted(&self.non_critical)
					.into_iter()
					.map(|(oid, value)| X509Ext::new(oid, value.as_slice(), false)),
			)
	}

	/// Always `false`: no critical extension is rejected as unsupported.
	pub fn has_unsupported_critical_extension(&self) -> bool {
		false
	}

	/// Replaces the value of a present extension, keeping its criticality.
	pub(crate) fn replace_extension(&mut self, ext: &dyn Extension) {
		let oid = oid::to_dotted(&ext.oid());
		let slot = match self.critical.get_mut(&oid) {
			Some(slot) => Some(slot),
			None => self.non_critical.get_mut(&oid),
		};
		if let Some(slot) = slot {
			*slot = ext.to_octets();
		}
	}

	/// Builds a set from a DER encoded `Extensions` SEQUENCE, as found in a
	/// certificate, a CRL or an extension request.
	pub fn from_der(der: &[u8]) -> Result<Self, Error> {
		let mut set = ExtensionSet::new();
		yasna::parse_der(der, |reader| {
			reader.read_sequence_of(|reader| {
				reader.read_sequence(|seq| {
					let oid = seq.next().read_oid()?;
					let critical = seq.read_optional(|r| r.read_bool())?.unwrap_or(false);
					let value = seq.next().read_bytes()?;
					set.add_wrapped(&oid, critical, &value);
					Ok(())
				})
			})
		})?;
		Ok(set)
	}

	/// Builds a set from the extensions of a DER encoded certificate
	#[cfg(feature = "x509-parser")]
	pub fn from_certificate_der(der: &[u8]) -> Result<Self, Error> {
		let (_remainder, x509) =
			x509_parser::parse_x509_certificate(der).or(Err(Error::CouldNotParseCertificate))?;
		let mut set = ExtensionSet::new();
		for ext in x509.extensions() {
			set.add_parsed(ext, Error::CouldNotParseCertificate)?;
		}
		Ok(set)
	}

	/// Builds a set from a certificate in the ASCII PEM format
	#[cfg(all(feature = "pem", feature = "x509-parser"))]
	pub fn from_certificate_pem(pem_str: &str) -> Result<Self, Error> {
		let certificate = pem::parse(pem_str)._err()?;
		Self::from_certificate_der(certificate.contents())
	}

	/// Builds a set from the extension request of a DER encoded PKCS #10
	/// certificate signing request
	#[cfg(feature = "x509-parser")]
	pub fn from_csr_der(der: &[u8]) -> Result<Self, Error> {
		use x509_parser::prelude::{FromDer, ParsedCriAttribute};
		let csr = x509_parser::certification_request::X509CertificationRequest::from_der(der)
			.map_err(|_| Error::CouldNotParseCertificationRequest)?
			.1;
		let mut set = ExtensionSet::new();
		// The raw attribute values are needed, so the parsed extension values
		// of `requested_extensions()` are not used.
		for attr in csr.certification_request_info.iter_attributes() {
			if let ParsedCriAttribute::ExtensionRequest(requested) = attr.parsed_attribute() {
				for ext in &requested.extensions {
					set.add_parsed(ext, Error::CouldNotParseCertificationRequest)?;
				}
			}
		}
		Ok(set)
	}

	/// Builds a set from a certificate signing request in the ASCII PEM format
	#[cfg(all(feature = "pem", feature = "x509-parser"))]
	pub fn from_csr_pem(pem_str: &str) -> Result<Self, Error> {
		let csr = pem::parse(pem_str)._err()?;
		Self::from_csr_der(csr.contents())
	}

	#[cfg(feature = "x509-parser")]
	fn add_parsed(
		&mut self,
		ext: &x509_parser::extensions::X509Extension<'_>,
		err: Error,
	) -> Result<(), Error> {
		let components = ext.oid.iter().ok_or(err)?.collect::<Vec<_>>();
		let oid = ObjectIdentifier::new(components);
		self.add_wrapped(&oid, ext.critical, ext.value);
		Ok(())
	}

	fn add_wrapped(&mut self, oid: &ObjectIdentifier, critical: bool, value: &[u8]) {
		let octets = yasna::construct_der(|writer| writer.write_bytes(value));
		let oid = oid::to_dotted(oid);
		if self.contains(&oid) {
			tracing::warn!(%oid, "duplicate extension, keeping the last one");
		}
		self.add_extension(oid, critical, octets);
	}

	/// Encodes the set as an `Extensions` SEQUENCE, critical extensions first.
	///
	/// Fails if an identifier added through [`add_extension`](Self::add_extension)
	/// is not a dotted object identifier.
	pub fn to_der(&self) -> Result<Vec<u8>, Error> {
		let mut entries = Vec::with_capacity(self.len());
		for ext in self.iter() {
			entries.push((oid::from_dotted(ext.oid())?, ext));
		}
		Ok(yasna::construct_der(|writer| {
			writer.write_sequence(|writer| {
				for (oid, ext) in &entries {
					ext::write_extension(
						writer,
						oid,
						Criticality::from(ext.is_critical()),
						ext.value(),
					);
				}
			})
		}))
	}

	/// Writes the set in the binary extension set format: the magic number,
	/// the format version, then a block of critical and a block of
	/// non-critical extensions.
	pub fn save<W: Write>(&self, mut writer: W) -> Result<(), Error> {
		writer.write_all(&MAGIC_NUMBER.to_be_bytes()).map_err(io_error)?;
		writer.write_all(&FORMAT_VERSION.to_be_bytes()).map_err(io_error)?;
		write_block(&mut writer, &self.critical)?;
		write_block(&mut writer, &self.non_critical)?;
		writer.flush().map_err(io_error)?;
		tracing::debug!(
			critical = self.critical.len(),
			non_critical = self.non_critical.len(),
			"saved extension set"
		);
		Ok(())
	}

	/// Reads a set written by [`save`](Self::save).
	///
	/// A wrong magic number, an unknown version and a stream that ends early
	/// fail with distinct [`LoadError`]s. Nothing is returned on failure.
	pub fn load<R: Read>(mut reader: R) -> Result<Self, Error> {
		let magic = i64::from_be_bytes(read_array(&mut reader)?);
		if magic != MAGIC_NUMBER {
			return Err(LoadError::BadMagicNumber(magic).into());
		}
		let version = i32::from_be_bytes(read_array(&mut reader)?);
		if version != FORMAT_VERSION {
			return Err(LoadError::UnsupportedVersion(version).into());
		}
		let critical = read_block(&mut reader)?;
		let non_critical = read_block(&mut reader)?;

		let mut set = ExtensionSet::new();
		for (oid, value) in critical {
			set.add_extension(oid, true, value);
		}
		for (oid, value) in non_critical {
			set.add_extension(oid, false, value);
		}
		tracing::debug!(
			version,
			critical = set.critical.len(),
			non_critical = set.non_critical.len(),
			"loaded extension set"
		);
		Ok(set)
	}

	/// Saves the set to the file at `path`, creating or truncating it.
	pub fn save_to_file(&self, path: impl AsRef<Path>) -> Result<(), Error> {
		let file = File::create(path).map_err(io_error)?;
		self.save(BufWriter::new(file))
	}

	/// Loads a set from the file at `path`.
	pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, Error> {
		let file = File::open(path).map_err(io_error)?;
		Self::load(BufReader::new(file))
	}
}

fn sorted(map: &HashMap<String, Vec<u8>>) -> Vec<(&String, &Vec<u8>)> {
	let mut entries = map.iter().collect::<Vec<_>>();
	entries.sort_by(|a, b| a.0.cmp(b.0));
	entries
}

fn io_error(e: io::Error) -> Error {
	if e.kind() == io::ErrorKind::UnexpectedEof {
		LoadError::Truncated.into()
	} else {
		Error::Io(e.to_string())
	}
}

fn write_block<W: Write>(writer: &mut W, block: &HashMap<String, Vec<u8>>) -> Result<(), Error> {
	writer.write_all(&length(block.len())?.to_be_bytes()).map_err(io_error)?;
	for (oid, value) in sorted(block) {
		let units = oid.encode_utf16().collect::<Vec<_>>();
		writer.write_all(&length(units.len())?.to_be_bytes()).map_err(io_error)?;
		for unit in units {
			writer.write_all(&unit.to_be_bytes()).map_err(io_error)?;
		}
		writer.write_all(&length(value.len())?.to_be_bytes()).map_err(io_error)?;
		writer.write_all(value).map_err(io_error)?;
		tracing::trace!(%oid, len = value.len(), "wrote extension");
	}
	Ok(())
}

fn length(len: usize) -> Result<i32, Error> {
	i32::try_from(len).map_err(|_| Error::Io(format!("length {} does not fit the format", len)))
}

fn read_array<R: Read, const N: usize>(reader: &mut R) -> Result<[u8; N], Error> {
	let mut buf = [0u8; N];
	reader.read_exact(&mut buf).map_err(io_error)?;
	Ok(buf)
}

fn read_length<R: Read>(reader: &mut R) -> Result<u64, Error> {
	let len = i32::from_be_bytes(read_array(reader)?);
	u64::try_from(len).map_err(|_| LoadError::NegativeLength(len).into())
}

/// Reads exactly `len` bytes without trusting `len` for the allocation.
fn read_bytes<R: Read>(reader: &mut R, len: u64) -> Result<Vec<u8>, Error> {
	let mut buf = Vec::new();
	reader.by_ref().take(len).read_to_end(&mut buf).map_err(io_error)?;
	if (buf.len() as u64) < len {
		return Err(LoadError::Truncated.into());
	}
	Ok(buf)
}

fn read_block<R: Read>(reader: &mut R) -> Result<Vec<(String, Vec<u8>)>, Error> {
	let count = read_length(reader)?;
	let mut entries = Vec::new();
	for _ in 0..count {
		let chars = read_length(reader)?;
		let units = read_bytes(reader, chars * 2)?
			.chunks(2)
			.map(|c| u16::from_be_bytes([c[0], c[1]]))
			.collect::<Vec<_>>();
		let oid = String::from_utf16(&units)
			.map_err(|_| Error::InvalidOid(String::from_utf16_lossy(&units)))?;
		let len = read_length(reader)?;
		let value = read_bytes(reader, len)?;
		tracing::trace!(%oid, len, "read extension");
		entries.push((oid, value));
	}
	Ok(entries)
}
