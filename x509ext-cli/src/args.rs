//! Command Line argument parsing
#![allow(missing_docs)]

use std::path::PathBuf;

use bpaf::Bpaf;

#[derive(Clone, Debug, Bpaf)]
#[bpaf(options, version)]
/// x509ext X.509 extension inspector
pub struct Options {
	/// Log debug output to stderr (RUST_LOG overrides)
	#[bpaf(short, long)]
	pub verbose: bool,
	#[bpaf(external)]
	pub command: Command,
}

#[derive(Clone, Debug, Bpaf)]
pub enum Command {
	/// Render the extensions of a certificate or certificate signing request
	#[bpaf(command)]
	Show {
		/// Wrap URIs in HTML anchors
		#[bpaf(long)]
		link_uris: bool,
		/// Certificate or CSR, PEM or DER
		#[bpaf(positional("INPUT"))]
		input: PathBuf,
	},
	/// Store the extensions of a certificate or CSR in an extension set file
	#[bpaf(command)]
	Export {
		/// Extension set file to write
		#[bpaf(short, long, argument("output.x509ext"))]
		output: PathBuf,
		/// Certificate or CSR, PEM or DER
		#[bpaf(positional("INPUT"))]
		input: PathBuf,
	},
	/// Render the extensions stored in an extension set file
	#[bpaf(command)]
	Dump {
		/// Wrap URIs in HTML anchors
		#[bpaf(long)]
		link_uris: bool,
		/// Extension set file
		#[bpaf(positional("SET"))]
		set: PathBuf,
	},
	/// Regenerate the key identifiers of an extension set file
	#[bpaf(command)]
	Update {
		/// Public key of the new subject: SubjectPublicKeyInfo, certificate or CSR
		#[bpaf(long, argument("key.pem"))]
		subject_key: PathBuf,
		/// Certificate of the issuer
		#[bpaf(long, argument("ca.pem"))]
		issuer: PathBuf,
		/// Where to write the updated set, defaults to SET
		#[bpaf(short, long, argument("output.x509ext"))]
		output: Option<PathBuf>,
		/// Extension set file
		#[bpaf(positional("SET"))]
		set: PathBuf,
	},
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn parse_update() {
		let opts = options()
			.run_inner(&[
				"-v",
				"update",
				"--subject-key",
				"key.pem",
				"--issuer",
				"ca.pem",
				"exts.x509ext",
			])
			.unwrap();
		assert!(opts.verbose);
		match opts.command {
			Command::Update {
				subject_key,
				issuer,
				output,
				set,
			} => {
				assert_eq!(subject_key, PathBuf::from("key.pem"));
				assert_eq!(issuer, PathBuf::from("ca.pem"));
				assert_eq!(output, None);
				assert_eq!(set, PathBuf::from("exts.x509ext"));
			},
			other => panic!("unexpected command {:?}", other),
		}
	}

	#[test]
	fn parse_show() {
		let opts = options()
			.run_inner(&["show", "--link-uris", "cert.der"])
			.unwrap();
		assert!(!opts.verbose);
		assert!(matches!(
			opts.command,
			Command::Show { link_uris: true, .. }
		));
	}

	#[test]
	fn export_needs_output() {
		assert!(options().run_inner(&["export", "cert.pem"]).is_err());
	}
}
