/*!
X.509 extension inspection and maintenance

This crate covers three things one needs when showing or re-issuing
certificates:

* decoding extension values into readable text, see [`X509Ext`] and [`render`],
* keeping a set of extensions split by criticality that can be stored in
  and read back from a small binary file, see [`ExtensionSet`],
* regenerating the subject and authority key identifiers of a set copied
  from a template, see [`update`].
*/
#![cfg_attr(
	feature = "x509-parser",
	doc = r##"
## Example

```
use rcgen::generate_simple_self_signed;
use x509ext::ExtensionSet;
# fn main () {
let cert = generate_simple_self_signed(vec!["crab.example".to_string()]).unwrap();
let set = ExtensionSet::from_certificate_der(&cert.serialize_der().unwrap()).unwrap();
for ext in set.iter() {
	println!("{}:", ext.name().unwrap_or(ext.oid()));
	println!("{}", ext.string_value().unwrap());
}
# }
```"##
)]
#![forbid(unsafe_code)]
#![forbid(non_ascii_idents)]
#![deny(missing_docs)]
#![allow(clippy::complexity, clippy::style, clippy::pedantic)]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]

pub use crate::error::{Error, LoadError};
pub use crate::ext_type::{friendly_name, ExtensionType};
pub use crate::extension_set::ExtensionSet;
pub use crate::hex::{hex_clear_dump, hex_string};
pub use crate::issuer::{Issuer, IssuerName, SerialNumber};
pub use crate::key_identifier::{KeyIdentifierGenerator, PublicKey, PublicKeyData};
pub use crate::render::{render, RenderOptions, RevocationReason, X509Ext};
pub use crate::updater::update;

mod error;
mod ext;
mod ext_type;
mod extension_set;
mod hex;
mod issuer;
mod key_identifier;
mod names;
mod oid;
mod render;
mod updater;
