//! Country names to flag codes.
//!
//! Track metadata spells countries freely ("UK", "United Kingdom",
//! "England"), so the lookup accepts the common variants. Codes follow
//! ISO 3166-1 alpha-2, plus the `gb-*` subdivision codes used by flag sets
//! for the home nations.

/// Flag code for a country name, ignoring case and surrounding whitespace.
///
/// Returns `None` for "N/A" and for names not in the table.
pub fn flag_code(country: &str) -> Option<&'static str> {
    let code = match country.trim().to_lowercase().as_str() {
        "argentina" => "ar",
        "australia" => "au",
        "austria" => "at",
        "azerbaijan" => "az",
        "bahrain" => "bh",
        "belgium" => "be",
        "brazil" => "br",
        "canada" => "ca",
        "chile" => "cl",
        "china" => "cn",
        "czech republic" | "czech" => "cz",
        "finland" => "fi",
        "france" => "fr",
        "germany" => "de",
        "great britain" | "uk" | "united kingdom" => "gb",
        "england" => "gb-eng",
        "scotland" => "gb-sct",
        "wales" => "gb-wls",
        "northern ireland" => "gb-nir",
        "hong kong" => "hk",
        "hungary" => "hu",
        "india" => "in",
        "indonesia" => "id",
        "ireland" => "ie",
        "italy" => "it",
        "japan" => "jp",
        "kuwait" => "kw",
        "lithuania" => "lt",
        "macau" => "mo",
        "malaysia" => "my",
        "mexico" => "mx",
        "monaco" => "mc",
        "morocco" => "ma",
        "netherlands" => "nl",
        "new zealand" => "nz",
        "poland" => "pl",
        "portugal" => "pt",
        "qatar" => "qa",
        "russia" => "ru",
        "saudi arabia" => "sa",
        "singapore" => "sg",
        "slovakia" => "sk",
        "south africa" => "za",
        "south korea" | "korea" => "kr",
        "spain" => "es",
        "sweden" => "se",
        "switzerland" => "ch",
        "thailand" => "th",
        "turkey" => "tr",
        "usa" | "united states" => "us",
        "united arab emirates" | "uae" | "emirates" => "ae",
        "uruguay" => "uy",
        _ => return None,
    };
    Some(code)
}
