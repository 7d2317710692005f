//! ISO 3166-1 country table joined to the ISO 4217 code of each country's currency.
//!
//! Where a country uses several legal tenders, the one listed first by ISO 4217
//! for that country is kept.
use super::CountryEntry;

macro_rules! country {
    ($alpha_2:literal, $name:literal, $currency:literal) => {
        CountryEntry { alpha_2: $alpha_2, name: $name, currency: Some($currency) }
    };
    ($alpha_2:literal, $name:literal) => {
        CountryEntry { alpha_2: $alpha_2, name: $name, currency: None }
    };
}

/// Countries in alpha-2 order.
pub static COUNTRIES: &[CountryEntry] = &[
    country!("AD", "Andorra", "EUR"),
    country!("AE", "United Arab Emirates", "AED"),
    country!("AF", "Afghanistan", "AFN"),
    country!("AG", "Antigua and Barbuda", "XCD"),
    country!("AI", "Anguilla", "XCD"),
    country!("AL", "Albania", "ALL"),
    country!("AM", "Armenia", "AMD"),
    country!("AO", "Angola", "AOA"),
    country!("AQ", "Antarctica"),
    country!("AR", "Argentina", "ARS"),
    country!("AS", "American Samoa", "USD"),
    country!("AT", "Austria", "EUR"),
    country!("AU", "Australia", "AUD"),
    country!("AW", "Aruba", "AWG"),
    country!("AX", "Åland Islands", "EUR"),
    country!("AZ", "Azerbaijan", "AZN"),
    country!("BA", "Bosnia and Herzegovina", "BAM"),
    country!("BB", "Barbados", "BBD"),
    country!("BD", "Bangladesh", "BDT"),
    country!("BE", "Belgium", "EUR"),
    country!("BF", "Burkina Faso", "XOF"),
    country!("BG", "Bulgaria", "BGN"),
    country!("BH", "Bahrain", "BHD"),
    country!("BI", "Burundi", "BIF"),
    country!("BJ", "Benin", "XOF"),
    country!("BL", "Saint Barthélemy", "EUR"),
    country!("BM", "Bermuda", "BMD"),
    country!("BN", "Brunei Darussalam", "BND"),
    country!("BO", "Bolivia, Plurinational State of", "BOB"),
    country!("BQ", "Bonaire, Sint Eustatius and Saba", "USD"),
    country!("BR", "Brazil", "BRL"),
    country!("BS", "Bahamas", "BSD"),
    country!("BT", "Bhutan", "BTN"),
    country!("BV", "Bouvet Island", "NOK"),
    country!("BW", "Botswana", "BWP"),
    country!("BY", "Belarus", "BYN"),
    country!("BZ", "Belize", "BZD"),
    country!("CA", "Canada", "CAD"),
    country!("CC", "Cocos (Keeling) Islands", "AUD"),
    country!("CD", "Congo, The Democratic Republic of the", "CDF"),
    country!("CF", "Central African Republic", "XAF"),
    country!("CG", "Congo", "XAF"),
    country!("CH", "Switzerland", "CHF"),
    country!("CI", "Côte d'Ivoire", "XOF"),
    country!("CK", "Cook Islands", "NZD"),
    country!("CL", "Chile", "CLP"),
    country!("CM", "Cameroon", "XAF"),
    country!("CN", "China", "CNY"),
    country!("CO", "Colombia", "COP"),
    country!("CR", "Costa Rica", "CRC"),
    country!("CU", "Cuba", "CUP"),
    country!("CV", "Cabo Verde", "CVE"),
    country!("CW", "Curaçao", "ANG"),
    country!("CX", "Christmas Island", "AUD"),
    country!("CY", "Cyprus", "EUR"),
    country!("CZ", "Czechia", "CZK"),
    country!("DE", "Germany", "EUR"),
    country!("DJ", "Djibouti", "DJF"),
    country!("DK", "Denmark", "DKK"),
    country!("DM", "Dominica", "XCD"),
    country!("DO", "Dominican Republic", "DOP"),
    country!("DZ", "Algeria", "DZD"),
    country!("EC", "Ecuador", "USD"),
    country!("EE", "Estonia", "EUR"),
    country!("EG", "Egypt", "EGP"),
    country!("EH", "Western Sahara", "MAD"),
    country!("ER", "Eritrea", "ERN"),
    country!("ES", "Spain", "EUR"),
    country!("ET", "Ethiopia", "ETB"),
    country!("FI", "Finland", "EUR"),
    country!("FJ", "Fiji", "FJD"),
    country!("FK", "Falkland Islands (Malvinas)", "FKP"),
    country!("FM", "Micronesia, Federated States of", "USD"),
    country!("FO", "Faroe Islands", "DKK"),
    country!("FR", "France", "EUR"),
    country!("GA", "Gabon", "XAF"),
    country!("GB", "United Kingdom", "GBP"),
    country!("GD", "Grenada", "XCD"),
    country!("GE", "Georgia", "GEL"),
    country!("GF", "French Guiana", "EUR"),
    country!("GG", "Guernsey", "GBP"),
    country!("GH", "Ghana", "GHS"),
    country!("GI", "Gibraltar", "GIP"),
    country!("GL", "Greenland", "DKK"),
    country!("GM", "Gambia", "GMD"),
    country!("GN", "Guinea", "GNF"),
    country!("GP", "Guadeloupe", "EUR"),
    country!("GQ", "Equatorial Guinea", "XAF"),
    country!("GR", "Greece", "EUR"),
    country!("GS", "South Georgia and the South Sandwich Islands", "GBP"),
    country!("GT", "Guatemala", "GTQ"),
    country!("GU", "Guam", "USD"),
    country!("GW", "Guinea-Bissau", "XOF"),
    country!("GY", "Guyana", "GYD"),
    country!("HK", "Hong Kong", "HKD"),
    country!("HM", "Heard Island and McDonald Islands", "AUD"),
    country!("HN", "Honduras", "HNL"),
    country!("HR", "Croatia", "EUR"),
    country!("HT", "Haiti", "HTG"),
    country!("HU", "Hungary", "HUF"),
    country!("ID", "Indonesia", "IDR"),
    country!("IE", "Ireland", "EUR"),
    country!("IL", "Israel", "ILS"),
    country!("IM", "Isle of Man", "GBP"),
    country!("IN", "India", "INR"),
    country!("IO", "British Indian Ocean Territory", "USD"),
    country!("IQ", "Iraq", "IQD"),
    country!("IR", "Iran, Islamic Republic of", "IRR"),
    country!("IS", "Iceland", "ISK"),
    country!("IT", "Italy", "EUR"),
    country!("JE", "Jersey", "GBP"),
    country!("JM", "Jamaica", "JMD"),
    country!("JO", "Jordan", "JOD"),
    country!("JP", "Japan", "JPY"),
    country!("KE", "Kenya", "KES"),
    country!("KG", "Kyrgyzstan", "KGS"),
    country!("KH", "Cambodia", "KHR"),
    country!("KI", "Kiribati", "AUD"),
    country!("KM", "Comoros", "KMF"),
    country!("KN", "Saint Kitts and Nevis", "XCD"),
    country!("KP", "Korea, Democratic People's Republic of", "KPW"),
    country!("KR", "Korea, Republic of", "KRW"),
    country!("KW", "Kuwait", "KWD"),
    country!("KY", "Cayman Islands", "KYD"),
    country!("KZ", "Kazakhstan", "KZT"),
    country!("LA", "Lao People's Democratic Republic", "LAK"),
    country!("LB", "Lebanon", "LBP"),
    country!("LC", "Saint Lucia", "XCD"),
    country!("LI", "Liechtenstein", "CHF"),
    country!("LK", "Sri Lanka", "LKR"),
    country!("LR", "Liberia", "LRD"),
    country!("LS", "Lesotho", "LSL"),
    country!("LT", "Lithuania", "EUR"),
    country!("LU", "Luxembourg", "EUR"),
    country!("LV", "Latvia", "EUR"),
    country!("LY", "Libya", "LYD"),
    country!("MA", "Morocco", "MAD"),
    country!("MC", "Monaco", "EUR"),
    country!("MD", "Moldova, Republic of", "MDL"),
    country!("ME", "Montenegro", "EUR"),
    country!("MF", "Saint Martin (French part)", "EUR"),
    country!("MG", "Madagascar", "MGA"),
    country!("MH", "Marshall Islands", "USD"),
    country!("MK", "North Macedonia", "MKD"),
    country!("ML", "Mali", "XOF"),
    country!("MM", "Myanmar", "MMK"),
    country!("MN", "Mongolia", "MNT"),
    country!("MO", "Macao", "MOP"),
    country!("MP", "Northern Mariana Islands", "USD"),
    country!("MQ", "Martinique", "EUR"),
    country!("MR", "Mauritania", "MRU"),
    country!("MS", "Montserrat", "XCD"),
    country!("MT", "Malta", "EUR"),
    country!("MU", "Mauritius", "MUR"),
    country!("MV", "Maldives", "MVR"),
    country!("MW", "Malawi", "MWK"),
    country!("MX", "Mexico", "MXN"),
    country!("MY", "Malaysia", "MYR"),
    country!("MZ", "Mozambique", "MZN"),
    country!("NA", "Namibia", "NAD"),
    country!("NC", "New Caledonia", "XPF"),
    country!("NE", "Niger", "XOF"),
    country!("NF", "Norfolk Island", "AUD"),
    country!("NG", "Nigeria", "NGN"),
    country!("NI", "Nicaragua", "NIO"),
    country!("NL", "Netherlands", "EUR"),
    country!("NO", "Norway", "NOK"),
    country!("NP", "Nepal", "NPR"),
    country!("NR", "Nauru", "AUD"),
    country!("NU", "Niue", "NZD"),
    country!("NZ", "New Zealand", "NZD"),
    country!("OM", "Oman", "OMR"),
    country!("PA", "Panama", "PAB"),
    country!("PE", "Peru", "PEN"),
    country!("PF", "French Polynesia", "XPF"),
    country!("PG", "Papua New Guinea", "PGK"),
    country!("PH", "Philippines", "PHP"),
    country!("PK", "Pakistan", "PKR"),
    country!("PL", "Poland", "PLN"),
    country!("PM", "Saint Pierre and Miquelon", "EUR"),
    country!("PN", "Pitcairn", "NZD"),
    country!("PR", "Puerto Rico", "USD"),
    country!("PS", "Palestine, State of"),
    country!("PT", "Portugal", "EUR"),
    country!("PW", "Palau", "USD"),
    country!("PY", "Paraguay", "PYG"),
    country!("QA", "Qatar", "QAR"),
    country!("RE", "Réunion", "EUR"),
    country!("RO", "Romania", "RON"),
    country!("RS", "Serbia", "RSD"),
    country!("RU", "Russian Federation", "RUB"),
    country!("RW", "Rwanda", "RWF"),
    country!("SA", "Saudi Arabia", "SAR"),
    country!("SB", "Solomon Islands", "SBD"),
    country!("SC", "Seychelles", "SCR"),
    country!("SD", "Sudan", "SDG"),
    country!("SE", "Sweden", "SEK"),
    country!("SG", "Singapore", "SGD"),
    country!("SH", "Saint Helena, Ascension and Tristan da Cunha", "SHP"),
    country!("SI", "Slovenia", "EUR"),
    country!("SJ", "Svalbard and Jan Mayen", "NOK"),
    country!("SK", "Slovakia", "EUR"),
    country!("SL", "Sierra Leone", "SLE"),
    country!("SM", "San Marino", "EUR"),
    country!("SN", "Senegal", "XOF"),
    country!("SO", "Somalia", "SOS"),
    country!("SR", "Suriname", "SRD"),
    country!("SS", "South Sudan", "SSP"),
    country!("ST", "Sao Tome and Principe", "STN"),
    country!("SV", "El Salvador", "SVC"),
    country!("SX", "Sint Maarten (Dutch part)", "ANG"),
    country!("SY", "Syrian Arab Republic", "SYP"),
    country!("SZ", "Eswatini", "SZL"),
    country!("TC", "Turks and Caicos Islands", "USD"),
    country!("TD", "Chad", "XAF"),
    country!("TF", "French Southern Territories", "EUR"),
    country!("TG", "Togo", "XOF"),
    country!("TH", "Thailand", "THB"),
    country!("TJ", "Tajikistan", "TJS"),
    country!("TK", "Tokelau", "NZD"),
    country!("TL", "Timor-Leste", "USD"),
    country!("TM", "Turkmenistan", "TMT"),
    country!("TN", "Tunisia", "TND"),
    country!("TO", "Tonga", "TOP"),
    country!("TR", "Türkiye", "TRY"),
    country!("TT", "Trinidad and Tobago", "TTD"),
    country!("TV", "Tuvalu", "AUD"),
    country!("TW", "Taiwan, Province of China", "TWD"),
    country!("TZ", "Tanzania, United Republic of", "TZS"),
    country!("UA", "Ukraine", "UAH"),
    country!("UG", "Uganda", "UGX"),
    country!("UM", "United States Minor Outlying Islands", "USD"),
    country!("US", "United States", "USD"),
    country!("UY", "Uruguay", "UYU"),
    country!("UZ", "Uzbekistan", "UZS"),
    country!("VA", "Holy See (Vatican City State)", "EUR"),
    country!("VC", "Saint Vincent and the Grenadines", "XCD"),
    country!("VE", "Venezuela, Bolivarian Republic of", "VES"),
    country!("VG", "Virgin Islands, British", "USD"),
    country!("VI", "Virgin Islands, U.S.", "USD"),
    country!("VN", "Viet Nam", "VND"),
    country!("VU", "Vanuatu", "VUV"),
    country!("WF", "Wallis and Futuna", "XPF"),
    country!("WS", "Samoa", "WST"),
    country!("YE", "Yemen", "YER"),
    country!("YT", "Mayotte", "EUR"),
    country!("ZA", "South Africa", "ZAR"),
    country!("ZM", "Zambia", "ZMW"),
    country!("ZW", "Zimbabwe", "ZWL"),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sorted_by_alpha_2() {
        assert!(COUNTRIES.windows(2).all(|w| w[0].alpha_2 < w[1].alpha_2));
    }

    #[test]
    fn territories_without_currency_are_marked() {
        let antarctica = COUNTRIES.iter().find(|c| c.alpha_2 == "AQ").unwrap();
        assert_eq!(antarctica.currency, None);
    }
}
