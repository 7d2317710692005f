//! Hand-maintained currency list shown after the country rows in directory listings.
//!
//! It is not used for resolution and is allowed to overlap the ISO table.
use super::CurrencyEntry;

/// Supplemental entries in declaration order.
pub static SUPPLEMENTAL: &[CurrencyEntry] = currency_entries![
    "AED" => "UAE Dirham", "AFN" => "Afghani", "ALL" => "Lek", "AMD" => "Armenian Dram",
    "ANG" => "Netherlands Antillean Guilder", "AOA" => "Kwanza", "ARS" => "Argentine Peso",
    "AUD" => "Australian Dollar", "AWG" => "Aruban Florin", "AZN" => "Azerbaijan Manat",
    "BAM" => "Convertible Mark", "BBD" => "Barbados Dollar", "BDT" => "Taka",
    "BGN" => "Bulgarian Lev", "BHD" => "Bahraini Dinar", "BIF" => "Burundi Franc",
    "BMD" => "Bermudian Dollar", "BND" => "Brunei Dollar", "BOB" => "Boliviano",
    "BRL" => "Brazilian Real", "BSD" => "Bahamian Dollar", "BTN" => "Ngultrum",
    "CAD" => "Canadian Dollar", "CDF" => "Congolese Franc", "CHF" => "Swiss Franc",
    "CNY" => "Yuan Renminbi", "COP" => "Colombian Peso", "CRC" => "Costa Rican Colon",
    "CZK" => "Czech Koruna", "DKK" => "Danish Krone", "DOP" => "Dominican Peso",
    "EGP" => "Egyptian Pound", "EUR" => "Euro", "GBP" => "Pound Sterling",
    "INR" => "Indian Rupee", "JPY" => "Yen", "KES" => "Kenyan Shilling",
    "KRW" => "Won", "KWD" => "Kuwaiti Dinar", "MZN" => "Mozambique Metical",
    "NOK" => "Norwegian Krone", "NZD" => "New Zealand Dollar", "OMR" => "Rial Omani",
    "PHP" => "Philippine Peso", "PKR" => "Pakistan Rupee", "PLN" => "Zloty",
    "QAR" => "Qatari Rial", "RON" => "Romanian Leu", "RUB" => "Russian Ruble",
    "SAR" => "Saudi Riyal", "SEK" => "Swedish Krona", "SGD" => "Singapore Dollar",
    "THB" => "Baht", "TRY" => "Turkish Lira", "USD" => "US Dollar", "ZAR" => "Rand",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_declaration_order() {
        assert_eq!(SUPPLEMENTAL.len(), 56);
        assert_eq!(SUPPLEMENTAL.first().map(|c| c.code), Some("AED"));
        assert_eq!(SUPPLEMENTAL.last().map(|c| c.code), Some("ZAR"));
    }
}
