use serde::Serialize;

/// Host language codes, in the host's numbering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(into = "&'static str")]
pub enum Language {
    English = 0,
    Japanese = 1,
    French = 2,
    Spanish = 3,
    German = 4,
    Italian = 5,
    Dutch = 6,
    PortugueseBrazil = 7,
    PortuguesePortugal = 8,
    Russian = 9,
    Korean = 10,
    ChineseTraditional = 11,
    ChineseSimplified = 12,
    Esperanto = 13,
    Polish = 14,
    Vietnamese = 15,
    Arabic = 16,
    Greek = 17,
    Turkish = 18,
    Slovak = 19,
    Persian = 20,
    Hebrew = 21,
    Asturian = 22,
    Finnish = 23,
    Indonesian = 24,
    Swedish = 25,
    Ukrainian = 26,
    Czech = 27,
}

impl Language {
    /// Number of codes the host defines; anything at or above is unrecognized.
    pub const COUNT: u32 = 28;

    pub const ALL: [Language; Self::COUNT as usize] = [
        Self::English,
        Self::Japanese,
        Self::French,
        Self::Spanish,
        Self::German,
        Self::Italian,
        Self::Dutch,
        Self::PortugueseBrazil,
        Self::PortuguesePortugal,
        Self::Russian,
        Self::Korean,
        Self::ChineseTraditional,
        Self::ChineseSimplified,
        Self::Esperanto,
        Self::Polish,
        Self::Vietnamese,
        Self::Arabic,
        Self::Greek,
        Self::Turkish,
        Self::Slovak,
        Self::Persian,
        Self::Hebrew,
        Self::Asturian,
        Self::Finnish,
        Self::Indonesian,
        Self::Swedish,
        Self::Ukrainian,
        Self::Czech,
    ];

    pub fn from_code(code: u32) -> Option<Self> {
        Self::ALL.get(code as usize).copied()
    }

    pub fn code(self) -> u32 {
        self as u32
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::English => "en",
            Self::Japanese => "ja",
            Self::French => "fr",
            Self::Spanish => "es",
            Self::German => "de",
            Self::Italian => "it",
            Self::Dutch => "nl",
            Self::PortugueseBrazil => "pt_BR",
            Self::PortuguesePortugal => "pt_PT",
            Self::Russian => "ru",
            Self::Korean => "ko",
            Self::ChineseTraditional => "zh_TW",
            Self::ChineseSimplified => "zh_CN",
            Self::Esperanto => "eo",
            Self::Polish => "pl",
            Self::Vietnamese => "vi",
            Self::Arabic => "ar",
            Self::Greek => "el",
            Self::Turkish => "tr",
            Self::Slovak => "sk",
            Self::Persian => "fa",
            Self::Hebrew => "he",
            Self::Asturian => "ast",
            Self::Finnish => "fi",
            Self::Indonesian => "id",
            Self::Swedish => "sv",
            Self::Ukrainian => "uk",
            Self::Czech => "cs",
        }
    }
}

impl From<Language> for &'static str {
    fn from(language: Language) -> Self {
        language.as_str()
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
