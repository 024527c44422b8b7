use std::io::{self, Write};

use tracing_subscriber::EnvFilter;
use x509ext::{update, ExtensionSet, RenderOptions};
use x509ext_cli::{describe, read_extensions, read_issuer, read_public_key, Result};
mod args;

use args::Command;

fn main() -> Result<()> {
	let opts = args::options().run();

	let default_level = if opts.verbose { "debug" } else { "warn" };
	let filter =
		EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
	tracing_subscriber::fmt()
		.with_env_filter(filter)
		.with_writer(io::stderr)
		.init();

	match opts.command {
		Command::Show { link_uris, input } => {
			let set = read_extensions(&input)?;
			print(&set, link_uris)?;
		},
		Command::Export { output, input } => {
			let set = read_extensions(&input)?;
			set.save_to_file(&output)?;
			tracing::info!(count = set.len(), path = %output.display(), "extensions exported");
		},
		Command::Dump { link_uris, set } => {
			let set = ExtensionSet::load_from_file(&set)?;
			print(&set, link_uris)?;
		},
		Command::Update {
			subject_key,
			issuer,
			output,
			set: path,
		} => {
			let mut set = ExtensionSet::load_from_file(&path)?;
			let subject_key = read_public_key(&subject_key)?;
			let issuer = read_issuer(&issuer)?;
			update(
				&mut set,
				&subject_key,
				&issuer.public_key,
				&issuer.name,
				&issuer.serial_number,
			)?;
			set.save_to_file(output.as_ref().unwrap_or(&path))?;
		},
	}

	Ok(())
}

fn print(set: &ExtensionSet, link_uris: bool) -> Result<()> {
	let opts = RenderOptions::default().with_link_uris(link_uris);
	io::stdout().write_all(describe(set, &opts)?.as_bytes())?;
	Ok(())
}
