//! The formats command: a table of the supported wrappers.

use comfy_table::{presets::UTF8_FULL, Table};
use promptdeck_prompts::{format, Format};

/// Sample text shown wrapped in each format.
const SAMPLE_TEXT: &str = "Say \"hello\"";

/// Build the formats table.
pub fn render_formats() -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec!["Name", "Highlight class", "Example"]);

    for f in Format::ALL {
        table.add_row(vec![
            f.as_str().to_string(),
            f.highlight_class().to_string(),
            format(SAMPLE_TEXT, f),
        ]);
    }

    table
}

/// Run `promptdeck formats`.
pub fn run_formats() {
    println!("{}", render_formats());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_lists_every_format() {
        let rendered = render_formats().to_string();
        for f in Format::ALL {
            assert!(rendered.contains(f.as_str()), "missing {f}");
            assert!(rendered.contains(f.highlight_class()));
        }
        assert!(rendered.contains("<content>"));
    }
}
