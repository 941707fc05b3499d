//! Composite "vendor" cells.

use tera::escape_html;

pub const NO_ADDRESS: &str = "No address in database";

/// The non-empty address lines, or a placeholder, followed by the country.
pub fn address_block(lines: [Option<&str>; 5], country: Option<&str>) -> String {
    let lines: Vec<_> = lines
        .into_iter()
        .flatten()
        .filter(|line| !line.trim().is_empty())
        .map(escape_html)
        .collect();

    let address = if lines.is_empty() {
        NO_ADDRESS.to_string()
    } else {
        lines.join("<BR>")
    };

    format!("{address}<BR>{}", escape_html(country.unwrap_or_default()))
}

/// The name, followed by its [`address_block`].
pub fn vendor_block(name: Option<&str>, lines: [Option<&str>; 5], country: Option<&str>) -> String {
    format!(
        "{}<BR>{}",
        escape_html(name.unwrap_or_default()),
        address_block(lines, country)
    )
}

/// The short form of the list view: name and country.
pub fn name_and_country(name: Option<&str>, country: Option<&str>) -> String {
    format!(
        "{}<BR>{}",
        escape_html(name.unwrap_or_default()),
        escape_html(country.unwrap_or_default())
    )
}

#[cfg(test)]
mod test {
    use super::*;
    use test_log::test;

    #[test]
    fn no_address() {
        assert_eq!(
            "No address in database<BR>US",
            address_block([None, Some(""), None, Some("  "), None], Some("US"))
        );
    }

    #[test]
    fn single_line() {
        assert_eq!(
            "123 Main St<BR>US",
            address_block([Some("123 Main St"), None, Some(""), None, None], Some("US"))
        );
    }

    #[test]
    fn gaps_are_skipped() {
        assert_eq!(
            "Building 5<BR>Springfield<BR>DE",
            address_block(
                [None, Some("Building 5"), None, Some("Springfield"), Some("")],
                Some("DE")
            )
        );
    }

    #[test]
    fn vendor() {
        assert_eq!(
            "ACME &amp; Sons<BR>No address in database<BR>",
            vendor_block(Some("ACME & Sons"), Default::default(), None)
        );
        assert_eq!(
            "ACME<BR>1 Road<BR>GB",
            vendor_block(Some("ACME"), [Some("1 Road"), None, None, None, None], Some("GB"))
        );
    }

    #[test]
    fn list_company() {
        assert_eq!(
            "&lt;b&gt;ACME<BR>US",
            name_and_country(Some("<b>ACME"), Some("US"))
        );
    }
}
