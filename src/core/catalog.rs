//! The currencies the rate provider is known to quote.

/// A supported currency with its display name and, when commonly used, its symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Currency {
    pub code: &'static str,
    pub name: &'static str,
    pub symbol: Option<&'static str>,
}

impl Currency {
    const fn new(code: &'static str, name: &'static str, symbol: Option<&'static str>) -> Self {
        Self { code, name, symbol }
    }
}

static CURRENCIES: &[Currency] = &[
    Currency::new("USD", "US Dollar", Some("$")),
    Currency::new("AED", "United Arab Emirates Dirham", None),
    Currency::new("AFN", "Afghan Afghani", None),
    Currency::new("ALL", "Albanian Lek", None),
    Currency::new("AMD", "Armenian Dram", None),
    Currency::new("ANG", "Netherlands Antillean Guilder", None),
    Currency::new("AOA", "Angolan Kwanza", None),
    Currency::new("ARS", "Argentine Peso", None),
    Currency::new("AUD", "Australian Dollar", Some("A$")),
    Currency::new("AWG", "Aruban Florin", None),
    Currency::new("AZN", "Azerbaijani Manat", None),
    Currency::new("BAM", "Bosnia-Herzegovina Convertible Mark", None),
    Currency::new("BBD", "Barbadian Dollar", None),
    Currency::new("BDT", "Bangladeshi Taka", None),
    Currency::new("BGN", "Bulgarian Lev", None),
    Currency::new("BHD", "Bahraini Dinar", None),
    Currency::new("BIF", "Burundian Franc", None),
    Currency::new("BMD", "Bermudian Dollar", None),
    Currency::new("BND", "Brunei Dollar", None),
    Currency::new("BOB", "Bolivian Boliviano", None),
    Currency::new("BRL", "Brazilian Real", Some("R$")),
    Currency::new("BSD", "Bahamian Dollar", None),
    Currency::new("BTN", "Bhutanese Ngultrum", None),
    Currency::new("BWP", "Botswana Pula", None),
    Currency::new("BYN", "Belarusian Ruble", None),
    Currency::new("BZD", "Belize Dollar", None),
    Currency::new("CAD", "Canadian Dollar", Some("CA$")),
    Currency::new("CDF", "Congolese Franc", None),
    Currency::new("CHF", "Swiss Franc", None),
    Currency::new("CLP", "Chilean Peso", None),
    Currency::new("CNY", "Chinese Yuan", Some("CN¥")),
    Currency::new("COP", "Colombian Peso", None),
    Currency::new("CRC", "Costa Rican Colón", None),
    Currency::new("CUP", "Cuban Peso", None),
    Currency::new("CVE", "Cape Verdean Escudo", None),
    Currency::new("CZK", "Czech Koruna", None),
    Currency::new("DJF", "Djiboutian Franc", None),
    Currency::new("DKK", "Danish Krone", None),
    Currency::new("DOP", "Dominican Peso", None),
    Currency::new("DZD", "Algerian Dinar", None),
    Currency::new("EGP", "Egyptian Pound", None),
    Currency::new("ERN", "Eritrean Nakfa", None),
    Currency::new("ETB", "Ethiopian Birr", None),
    Currency::new("EUR", "Euro", Some("€")),
    Currency::new("FJD", "Fijian Dollar", None),
    Currency::new("FKP", "Falkland Islands Pound", None),
    Currency::new("FOK", "Faroese Króna", None),
    Currency::new("GBP", "British Pound", Some("£")),
    Currency::new("GEL", "Georgian Lari", None),
    Currency::new("GGP", "Guernsey Pound", None),
    Currency::new("GHS", "Ghanaian Cedi", None),
    Currency::new("GIP", "Gibraltar Pound", None),
    Currency::new("GMD", "Gambian Dalasi", None),
    Currency::new("GNF", "Guinean Franc", None),
    Currency::new("GTQ", "Guatemalan Quetzal", None),
    Currency::new("GYD", "Guyanese Dollar", None),
    Currency::new("HKD", "Hong Kong Dollar", Some("HK$")),
    Currency::new("HNL", "Honduran Lempira", None),
    Currency::new("HRK", "Croatian Kuna", None),
    Currency::new("HTG", "Haitian Gourde", None),
    Currency::new("HUF", "Hungarian Forint", None),
    Currency::new("IDR", "Indonesian Rupiah", None),
    Currency::new("ILS", "Israeli New Shekel", Some("₪")),
    Currency::new("INR", "Indian Rupee", Some("₹")),
    Currency::new("IQD", "Iraqi Dinar", None),
    Currency::new("IRR", "Iranian Rial", None),
    Currency::new("ISK", "Icelandic Króna", None),
    Currency::new("JMD", "Jamaican Dollar", None),
    Currency::new("JOD", "Jordanian Dinar", None),
    Currency::new("JPY", "Japanese Yen", Some("¥")),
    Currency::new("KES", "Kenyan Shilling", None),
    Currency::new("KGS", "Kyrgyzstani Som", None),
    Currency::new("KHR", "Cambodian Riel", None),
    Currency::new("KMF", "Comorian Franc", None),
    Currency::new("KRW", "South Korean Won", Some("₩")),
    Currency::new("KWD", "Kuwaiti Dinar", None),
    Currency::new("KYD", "Cayman Islands Dollar", None),
    Currency::new("KZT", "Kazakhstani Tenge", None),
    Currency::new("LAK", "Lao Kip", None),
    Currency::new("LBP", "Lebanese Pound", None),
    Currency::new("LKR", "Sri Lankan Rupee", None),
    Currency::new("LRD", "Liberian Dollar", None),
    Currency::new("LSL", "Lesotho Loti", None),
    Currency::new("LYD", "Libyan Dinar", None),
    Currency::new("MAD", "Moroccan Dirham", None),
    Currency::new("MDL", "Moldovan Leu", None),
    Currency::new("MGA", "Malagasy Ariary", None),
    Currency::new("MKD", "Macedonian Denar", None),
    Currency::new("MMK", "Myanmar Kyat", None),
    Currency::new("MNT", "Mongolian Tögrög", None),
    Currency::new("MOP", "Macanese Pataca", None),
    Currency::new("MRU", "Mauritanian Ouguiya", None),
    Currency::new("MUR", "Mauritian Rupee", None),
    Currency::new("MVR", "Maldivian Rufiyaa", None),
    Currency::new("MWK", "Malawian Kwacha", None),
    Currency::new("MXN", "Mexican Peso", Some("MX$")),
    Currency::new("MYR", "Malaysian Ringgit", None),
    Currency::new("MZN", "Mozambican Metical", None),
    Currency::new("NAD", "Namibian Dollar", None),
    Currency::new("NGN", "Nigerian Naira", None),
    Currency::new("NIO", "Nicaraguan Córdoba", None),
    Currency::new("NOK", "Norwegian Krone", None),
    Currency::new("NPR", "Nepalese Rupee", None),
    Currency::new("NZD", "New Zealand Dollar", Some("NZ$")),
    Currency::new("OMR", "Omani Rial", None),
    Currency::new("PAB", "Panamanian Balboa", None),
    Currency::new("PEN", "Peruvian Sol", None),
    Currency::new("PGK", "Papua New Guinean Kina", None),
    Currency::new("PHP", "Philippine Peso", Some("₱")),
    Currency::new("PKR", "Pakistani Rupee", None),
    Currency::new("PLN", "Polish Złoty", None),
    Currency::new("PYG", "Paraguayan Guarani", None),
    Currency::new("QAR", "Qatari Riyal", None),
    Currency::new("RON", "Romanian Leu", None),
    Currency::new("RSD", "Serbian Dinar", None),
    Currency::new("RUB", "Russian Ruble", None),
    Currency::new("RWF", "Rwandan Franc", None),
    Currency::new("SAR", "Saudi Riyal", None),
    Currency::new("SBD", "Solomon Islands Dollar", None),
    Currency::new("SCR", "Seychellois Rupee", None),
    Currency::new("SDG", "Sudanese Pound", None),
    Currency::new("SEK", "Swedish Krona", None),
    Currency::new("SGD", "Singapore Dollar", None),
    Currency::new("SHP", "Saint Helena Pound", None),
    Currency::new("SLE", "Sierra Leonean Leone", None),
    Currency::new("SLL", "Sierra Leonean Leone", None),
    Currency::new("SOS", "Somali Shilling", None),
    Currency::new("SRD", "Surinamese Dollar", None),
    Currency::new("SSP", "South Sudanese Pound", None),
    Currency::new("STN", "São Tomé and Príncipe Dobra", None),
    Currency::new("SYP", "Syrian Pound", None),
    Currency::new("SZL", "Eswatini Lilangeni", None),
    Currency::new("THB", "Thai Baht", None),
    Currency::new("TJS", "Tajikistani Somoni", None),
    Currency::new("TMT", "Turkmenistani Manat", None),
    Currency::new("TND", "Tunisian Dinar", None),
    Currency::new("TOP", "Tongan Paʻanga", None),
    Currency::new("TRY", "Turkish Lira", None),
    Currency::new("TTD", "Trinidad and Tobago Dollar", None),
    Currency::new("TVD", "Tuvaluan Dollar", None),
    Currency::new("TWD", "New Taiwan Dollar", Some("NT$")),
    Currency::new("TZS", "Tanzanian Shilling", None),
    Currency::new("UAH", "Ukrainian Hryvnia", None),
    Currency::new("UGX", "Ugandan Shilling", None),
    Currency::new("UYU", "Uruguayan Peso", None),
    Currency::new("UZS", "Uzbekistani Soʻm", None),
    Currency::new("VES", "Venezuelan Bolívar", None),
    Currency::new("VND", "Vietnamese Đồng", Some("₫")),
    Currency::new("VUV", "Vanuatu Vatu", None),
    Currency::new("WST", "Samoan Tālā", None),
    Currency::new("XAF", "Central African CFA Franc", Some("FCFA")),
    Currency::new("XCD", "East Caribbean Dollar", Some("EC$")),
    Currency::new("XCG", "Caribbean Guilder", None),
    Currency::new("XDR", "Special Drawing Rights", None),
    Currency::new("XOF", "West African CFA Franc", Some("F CFA")),
    Currency::new("XPF", "CFP Franc", Some("CFPF")),
    Currency::new("YER", "Yemeni Rial", None),
    Currency::new("ZAR", "South African Rand", None),
    Currency::new("ZMW", "Zambian Kwacha", None),
    Currency::new("ZWL", "Zimbabwean Dollar", None),
];

/// All supported currencies, ordered with USD first and then alphabetically.
pub fn all() -> &'static [Currency] {
    CURRENCIES
}

/// Finds a supported currency by code, ignoring case.
pub fn lookup(code: &str) -> Option<&'static Currency> {
    let code = code.trim();
    CURRENCIES.iter().find(|c| c.code.eq_ignore_ascii_case(code))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup() {
        let eur = lookup("eur").unwrap();
        assert_eq!(eur.name, "Euro");
        assert_eq!(eur.symbol, Some("€"));

        let chf = lookup("CHF").unwrap();
        assert_eq!(chf.name, "Swiss Franc");
        assert!(chf.symbol.is_none());

        assert!(lookup("ZZZ").is_none());
    }

    #[test]
    fn test_catalog_codes_are_unique_and_well_formed() {
        let mut codes: Vec<_> = all().iter().map(|c| c.code).collect();
        assert_eq!(all()[0].code, "USD");
        assert!(codes.iter().all(|c| c.len() == 3 && c.chars().all(|ch| ch.is_ascii_uppercase())));
        let total = codes.len();
        codes.sort_unstable();
        codes.dedup();
        assert_eq!(codes.len(), total);
    }
}
