//! Static subtag data distilled from the IANA language subtag registry and
//! the ISO 639 / ISO 15924 / ISO 3166 code lists.
//!
//! Codes are stored in their canonical registry casing. Lookups elsewhere in
//! the crate are case-insensitive; these tables are never consulted directly
//! outside of [`crate::registry`].

/// Language records: `(code, name, iso639-3 code, deprecated)`.
///
/// The ISO 639-3 column records the macrolanguage mapping used by legacy
/// writing-system data where it differs from a plain alpha-3 expansion.
pub(crate) const LANGUAGES: &[(&str, &str, Option<&str>, bool)] = &[
    ("aa", "Afar", Some("aar"), false),
    ("ab", "Abkhazian", Some("abk"), false),
    ("af", "Afrikaans", Some("afr"), false),
    ("am", "Amharic", Some("amh"), false),
    ("ar", "Arabic", Some("ara"), false),
    ("as", "Assamese", Some("asm"), false),
    ("az", "Azerbaijani", Some("aze"), false),
    ("ba", "Bashkir", Some("bak"), false),
    ("be", "Belarusian", Some("bel"), false),
    ("bg", "Bulgarian", Some("bul"), false),
    ("bn", "Bengali", Some("ben"), false),
    ("bo", "Tibetan", Some("bod"), false),
    ("br", "Breton", Some("bre"), false),
    ("bs", "Bosnian", Some("bos"), false),
    ("ca", "Catalan", Some("cat"), false),
    ("cmn", "Mandarin Chinese", None, false),
    ("cs", "Czech", Some("ces"), false),
    ("cy", "Welsh", Some("cym"), false),
    ("da", "Danish", Some("dan"), false),
    ("de", "German", Some("deu"), false),
    ("dz", "Dzongkha", Some("dzo"), false),
    ("el", "Modern Greek", Some("ell"), false),
    ("en", "English", Some("eng"), false),
    ("eo", "Esperanto", Some("epo"), false),
    ("es", "Spanish", Some("spa"), false),
    ("et", "Estonian", Some("est"), false),
    ("eu", "Basque", Some("eus"), false),
    ("fa", "Persian", Some("fas"), false),
    ("fi", "Finnish", Some("fin"), false),
    ("fj", "Fijian", Some("fij"), false),
    ("fo", "Faroese", Some("fao"), false),
    ("fr", "French", Some("fra"), false),
    ("fy", "Western Frisian", Some("fry"), false),
    ("ga", "Irish", Some("gle"), false),
    ("gd", "Scottish Gaelic", Some("gla"), false),
    ("gl", "Galician", Some("glg"), false),
    ("gn", "Guarani", Some("grn"), false),
    ("grc", "Ancient Greek", None, false),
    ("gu", "Gujarati", Some("guj"), false),
    ("ha", "Hausa", Some("hau"), false),
    ("hak", "Hakka Chinese", None, false),
    ("haw", "Hawaiian", None, false),
    ("he", "Hebrew", Some("heb"), false),
    ("hi", "Hindi", Some("hin"), false),
    ("hr", "Croatian", Some("hrv"), false),
    ("ht", "Haitian", Some("hat"), false),
    ("hu", "Hungarian", Some("hun"), false),
    ("hy", "Armenian", Some("hye"), false),
    ("id", "Indonesian", Some("ind"), false),
    ("ig", "Igbo", Some("ibo"), false),
    ("is", "Icelandic", Some("isl"), false),
    ("it", "Italian", Some("ita"), false),
    ("iu", "Inuktitut", Some("iku"), false),
    // superseded by "he", kept for legacy data
    ("iw", "Hebrew", Some("heb"), true),
    ("ja", "Japanese", Some("jpn"), false),
    ("jv", "Javanese", Some("jav"), false),
    ("ka", "Georgian", Some("kat"), false),
    ("kk", "Kazakh", Some("kaz"), false),
    ("kl", "Kalaallisut", Some("kal"), false),
    ("km", "Central Khmer", Some("khm"), false),
    ("kn", "Kannada", Some("kan"), false),
    ("ko", "Korean", Some("kor"), false),
    ("ks", "Kashmiri", Some("kas"), false),
    ("ku", "Kurdish", Some("kur"), false),
    ("ky", "Kirghiz", Some("kir"), false),
    ("la", "Latin", Some("lat"), false),
    ("lb", "Luxembourgish", Some("ltz"), false),
    ("lo", "Lao", Some("lao"), false),
    ("lt", "Lithuanian", Some("lit"), false),
    ("lv", "Latvian", Some("lav"), false),
    ("mg", "Malagasy", Some("mlg"), false),
    ("mi", "Maori", Some("mri"), false),
    ("mk", "Macedonian", Some("mkd"), false),
    ("ml", "Malayalam", Some("mal"), false),
    ("mn", "Mongolian", Some("mon"), false),
    ("mr", "Marathi", Some("mar"), false),
    ("ms", "Malay", Some("msa"), false),
    ("mt", "Maltese", Some("mlt"), false),
    ("mul", "Multiple languages", None, false),
    ("my", "Burmese", Some("mya"), false),
    ("nan", "Min Nan Chinese", None, false),
    ("ne", "Nepali", Some("nep"), false),
    ("nl", "Dutch", Some("nld"), false),
    ("no", "Norwegian", Some("nor"), false),
    ("ny", "Nyanja", Some("nya"), false),
    ("or", "Oriya", Some("ori"), false),
    ("pa", "Panjabi", Some("pan"), false),
    ("pl", "Polish", Some("pol"), false),
    ("ps", "Pushto", Some("pus"), false),
    ("pt", "Portuguese", Some("por"), false),
    ("qu", "Quechua", Some("que"), false),
    ("ro", "Romanian", Some("ron"), false),
    ("ru", "Russian", Some("rus"), false),
    ("rw", "Kinyarwanda", Some("kin"), false),
    ("sa", "Sanskrit", Some("san"), false),
    ("sd", "Sindhi", Some("snd"), false),
    ("si", "Sinhala", Some("sin"), false),
    ("sk", "Slovak", Some("slk"), false),
    ("sl", "Slovenian", Some("slv"), false),
    ("so", "Somali", Some("som"), false),
    ("sq", "Albanian", Some("sqi"), false),
    ("sr", "Serbian", Some("srp"), false),
    ("su", "Sundanese", Some("sun"), false),
    ("sv", "Swedish", Some("swe"), false),
    ("sw", "Swahili", Some("swa"), false),
    ("ta", "Tamil", Some("tam"), false),
    ("te", "Telugu", Some("tel"), false),
    ("tg", "Tajik", Some("tgk"), false),
    ("th", "Thai", Some("tha"), false),
    ("ti", "Tigrinya", Some("tir"), false),
    ("tk", "Turkmen", Some("tuk"), false),
    ("tl", "Tagalog", Some("tgl"), false),
    ("tr", "Turkish", Some("tur"), false),
    ("tt", "Tatar", Some("tat"), false),
    ("ug", "Uighur", Some("uig"), false),
    ("uk", "Ukrainian", Some("ukr"), false),
    ("und", "Undetermined", None, false),
    ("ur", "Urdu", Some("urd"), false),
    ("uz", "Uzbek", Some("uzb"), false),
    ("vi", "Vietnamese", Some("vie"), false),
    ("wo", "Wolof", Some("wol"), false),
    ("xh", "Xhosa", Some("xho"), false),
    ("yi", "Yiddish", Some("yid"), false),
    ("yo", "Yoruba", Some("yor"), false),
    ("yue", "Cantonese", None, false),
    // macrolanguage mapping; drives the implicit CN region on output
    ("zh", "Chinese", Some("cmn"), false),
    ("zu", "Zulu", Some("zul"), false),
    ("zxx", "No linguistic content", None, false),
];

/// Script records: `(code, name, deprecated)`.
pub(crate) const SCRIPTS: &[(&str, &str, bool)] = &[
    ("Arab", "Arabic", false),
    ("Armn", "Armenian", false),
    ("Beng", "Bengali", false),
    ("Bopo", "Bopomofo", false),
    ("Brai", "Braille", false),
    ("Cans", "Unified Canadian Aboriginal Syllabics", false),
    ("Cher", "Cherokee", false),
    ("Cyrl", "Cyrillic", false),
    ("Deva", "Devanagari", false),
    ("Ethi", "Ethiopic", false),
    ("Geor", "Georgian", false),
    ("Grek", "Greek", false),
    ("Gujr", "Gujarati", false),
    ("Guru", "Gurmukhi", false),
    ("Hang", "Hangul", false),
    ("Hani", "Han", false),
    ("Hans", "Han (Simplified variant)", false),
    ("Hant", "Han (Traditional variant)", false),
    ("Hebr", "Hebrew", false),
    ("Hira", "Hiragana", false),
    ("Jpan", "Japanese", false),
    ("Kana", "Katakana", false),
    ("Khmr", "Khmer", false),
    ("Knda", "Kannada", false),
    ("Kore", "Korean", false),
    ("Laoo", "Lao", false),
    ("Latn", "Latin", false),
    ("Mlym", "Malayalam", false),
    ("Mong", "Mongolian", false),
    ("Mymr", "Myanmar", false),
    ("Orya", "Oriya", false),
    ("Sinh", "Sinhala", false),
    ("Taml", "Tamil", false),
    ("Telu", "Telugu", false),
    ("Thaa", "Thaana", false),
    ("Thai", "Thai", false),
    ("Tibt", "Tibetan", false),
    ("Vaii", "Vai", false),
    ("Yiii", "Yi", false),
    ("Zsym", "Symbols", false),
    ("Zxxx", "Code for unwritten documents", false),
    ("Zyyy", "Code for undetermined script", false),
    ("Zzzz", "Code for uncoded script", false),
];

/// Region records: `(code, name, deprecated)`.
pub(crate) const REGIONS: &[(&str, &str, bool)] = &[
    ("419", "Latin America and the Caribbean", false),
    ("AE", "United Arab Emirates", false),
    ("AF", "Afghanistan", false),
    ("AL", "Albania", false),
    ("AM", "Armenia", false),
    ("AR", "Argentina", false),
    ("AT", "Austria", false),
    ("AU", "Australia", false),
    ("BA", "Bosnia and Herzegovina", false),
    ("BD", "Bangladesh", false),
    ("BE", "Belgium", false),
    ("BG", "Bulgaria", false),
    ("BO", "Bolivia", false),
    ("BR", "Brazil", false),
    ("BY", "Belarus", false),
    ("CA", "Canada", false),
    ("CH", "Switzerland", false),
    ("CL", "Chile", false),
    ("CN", "China", false),
    ("CO", "Colombia", false),
    ("CZ", "Czechia", false),
    ("DE", "Germany", false),
    ("DK", "Denmark", false),
    ("DZ", "Algeria", false),
    ("EC", "Ecuador", false),
    ("EE", "Estonia", false),
    ("EG", "Egypt", false),
    ("ER", "Eritrea", false),
    ("ES", "Spain", false),
    ("ET", "Ethiopia", false),
    ("FI", "Finland", false),
    ("FR", "France", false),
    ("GB", "United Kingdom", false),
    ("GH", "Ghana", false),
    ("GR", "Greece", false),
    ("HK", "Hong Kong", false),
    ("HR", "Croatia", false),
    ("HU", "Hungary", false),
    ("ID", "Indonesia", false),
    ("IE", "Ireland", false),
    ("IL", "Israel", false),
    ("IN", "India", false),
    ("IQ", "Iraq", false),
    ("IR", "Iran", false),
    ("IS", "Iceland", false),
    ("IT", "Italy", false),
    ("JP", "Japan", false),
    ("KE", "Kenya", false),
    ("KH", "Cambodia", false),
    ("KP", "North Korea", false),
    ("KR", "South Korea", false),
    ("LA", "Laos", false),
    ("LK", "Sri Lanka", false),
    ("LT", "Lithuania", false),
    ("LU", "Luxembourg", false),
    ("LV", "Latvia", false),
    ("MA", "Morocco", false),
    ("MK", "North Macedonia", false),
    ("MM", "Myanmar", false),
    ("MO", "Macao", false),
    ("MX", "Mexico", false),
    ("MY", "Malaysia", false),
    ("NG", "Nigeria", false),
    ("NL", "Netherlands", false),
    ("NO", "Norway", false),
    ("NP", "Nepal", false),
    ("NZ", "New Zealand", false),
    ("PE", "Peru", false),
    ("PH", "Philippines", false),
    ("PK", "Pakistan", false),
    ("PL", "Poland", false),
    ("PT", "Portugal", false),
    ("PY", "Paraguay", false),
    ("RO", "Romania", false),
    ("RS", "Serbia", false),
    ("RU", "Russia", false),
    ("SA", "Saudi Arabia", false),
    ("SE", "Sweden", false),
    ("SG", "Singapore", false),
    ("SI", "Slovenia", false),
    ("SK", "Slovakia", false),
    // dissolved; kept for legacy data
    ("SU", "Union of Soviet Socialist Republics", true),
    ("TH", "Thailand", false),
    ("TN", "Tunisia", false),
    ("TR", "Turkey", false),
    ("TW", "Taiwan", false),
    ("TZ", "Tanzania", false),
    ("UA", "Ukraine", false),
    ("UG", "Uganda", false),
    ("US", "United States", false),
    ("UY", "Uruguay", false),
    ("VE", "Venezuela", false),
    ("VN", "Vietnam", false),
    ("YU", "Yugoslavia", true),
    ("ZA", "South Africa", false),
    ("ZW", "Zimbabwe", false),
];

/// Registered BCP 47 variant records: `(code, name, deprecated)`.
pub(crate) const VARIANTS: &[(&str, &str, bool)] = &[
    ("1606nict", "Late Middle French (to 1606)", false),
    ("1694acad", "Early Modern French", false),
    ("1901", "Traditional German orthography", false),
    ("1959acad", "Academic Belarusian as codified in 1959", false),
    ("1994", "Standardized Resian orthography", false),
    ("1996", "German orthography of 1996", false),
    ("abl1943", "Orthographic formulation of 1943", false),
    ("alalc97", "ALA-LC Romanization, 1997 edition", false),
    ("aluku", "Aluku dialect", false),
    ("arevela", "Eastern Armenian", false),
    ("arevmda", "Western Armenian", false),
    ("baku1926", "Unified Turkic Latin Alphabet", false),
    ("bauddha", "Buddhist Hybrid Sanskrit", false),
    ("biske", "The San Giorgio dialect of Resian", false),
    ("boont", "Boontling", false),
    ("fonipa", "International Phonetic Alphabet", false),
    ("fonupa", "Uralic Phonetic Alphabet", false),
    ("fonxsamp", "Transcribed in X-SAMPA", false),
    ("hepburn", "Hepburn romanization", false),
    ("heploc", "Hepburn romanization, Library of Congress method", true),
    ("luna1918", "Post-1917 Russian orthography", false),
    ("monoton", "Monotonic Greek", false),
    ("nedis", "Natisone dialect", false),
    ("njiva", "The Gniva dialect of Resian", false),
    ("osojs", "The Oseacco dialect of Resian", false),
    ("petr1708", "Petrine orthography", false),
    ("pinyin", "Pinyin romanization", false),
    ("polyton", "Polytonic Greek", false),
    ("rozaj", "Resian", false),
    ("scotland", "Scottish Standard English", false),
    ("scouse", "Scouse", false),
    ("solba", "The Stolvizza dialect of Resian", false),
    ("tarask", "Belarusian in Taraskievica orthography", false),
    ("valencia", "Valencian", false),
    ("wadegile", "Wade-Giles romanization", false),
];

/// Well-known private-use variant records: `(code, name)`.
///
/// These are not registered with IANA but occur widely in writing-system
/// data, so they carry display names.
pub(crate) const COMMON_PRIVATE_USE_VARIANTS: &[(&str, &str)] = &[
    ("audio", "Audio"),
    ("emic", "Phonemic"),
    ("etic", "Phonetic"),
];
