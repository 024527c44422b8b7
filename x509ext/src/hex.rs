//! Hexadecimal renderings shared by the extension decoders.

const DUMP_LINE_LEN: usize = 8;

/// Formats `bytes` as an unsigned big-endian number: `0x` followed by upper case
/// hex digits in space separated groups of four.
///
/// Leading zero bytes do not survive, the digits are left padded with `0` until
/// the last group is complete.
///
/// ```
/// assert_eq!(x509ext::hex_string(&[0x00, 0x01, 0xAB, 0xCD, 0xEF]), "0x01AB CDEF");
/// ```
pub fn hex_string(bytes: &[u8]) -> String {
	let first_non_zero = bytes.iter().position(|b| *b != 0).unwrap_or(bytes.len());
	let magnitude = &bytes[first_non_zero..];

	let digits = hex::encode_upper(magnitude);
	let digits = digits.trim_start_matches('0');
	let digits = if digits.is_empty() { "0" } else { digits };

	let padding = (4 - digits.len() % 4) % 4;
	let padded: String = std::iter::repeat('0')
		.take(padding)
		.chain(digits.chars())
		.collect();

	let mut out = String::from("0x");
	for (i, c) in padded.chars().enumerate() {
		out.push(c);
		if (i + 1) % 4 == 0 && i + 1 != padded.len() {
			out.push(' ');
		}
	}
	out
}

/// Formats `bytes` as a hex dump with eight bytes per line, followed by the
/// Latin-1 rendering of the same bytes (control characters as `.`).
///
/// Lines are separated by `\n` and there is no trailing newline.
pub fn hex_clear_dump(bytes: &[u8]) -> String {
	bytes
		.chunks(DUMP_LINE_LEN)
		.map(hex_clear_line)
		.collect::<Vec<_>>()
		.join("\n")
}

fn hex_clear_line(line: &[u8]) -> String {
	let hex = line
		.iter()
		.map(|b| hex::encode_upper([*b]))
		.collect::<Vec<_>>()
		.join(" ");

	let clear: String = line
		.iter()
		.map(|&b| {
			let c = char::from(b);
			if c.is_control() {
				'.'
			} else {
				c
			}
		})
		.collect();

	let mut out = hex;
	for _ in line.len()..DUMP_LINE_LEN {
		out.push_str("   ");
	}
	out.push_str("   ");
	out.push_str(&clear);
	out
}

/// Upper case hex without grouping or prefix.
pub(crate) fn plain_hex(bytes: &[u8]) -> String {
	hex::encode_upper(bytes)
}
