//! Enumerated parameter values accepted by the PDFVector API.

use serde::{Deserialize, Serialize};

/// Academic database searched by `academic/search`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Provider {
    /// arXiv preprints.
    #[serde(rename = "arxiv")]
    Arxiv,
    /// Education Resources Information Center.
    Eric,
    /// Google Scholar.
    GoogleScholar,
    /// PubMed.
    #[serde(rename = "pubmed")]
    PubMed,
    /// Semantic Scholar.
    #[default]
    SemanticScholar,
}

impl Provider {
    /// All providers, in the order the node lists them.
    pub const ALL: [Self; 5] =
        [Self::Arxiv, Self::Eric, Self::GoogleScholar, Self::PubMed, Self::SemanticScholar];

    /// Value sent on the wire.
    #[must_use]
    pub const fn value(self) -> &'static str {
        match self {
            Self::Arxiv => "arxiv",
            Self::Eric => "eric",
            Self::GoogleScholar => "google-scholar",
            Self::PubMed => "pubmed",
            Self::SemanticScholar => "semantic-scholar",
        }
    }

    /// Label shown to users.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Arxiv => "ArXiv",
            Self::Eric => "ERIC",
            Self::GoogleScholar => "Google Scholar",
            Self::PubMed => "PubMed",
            Self::SemanticScholar => "Semantic Scholar",
        }
    }
}

/// Publication field that can be requested from search and fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PublicationField {
    Abstract,
    Authors,
    Date,
    Doi,
    #[serde(rename = "pdfURL")]
    PdfUrl,
    Provider,
    ProviderData,
    #[serde(rename = "providerURL")]
    ProviderUrl,
    Title,
    TotalCitations,
    TotalReferences,
    Url,
    Year,
}

impl PublicationField {
    /// All fields, in the order the node lists them.
    pub const ALL: [Self; 13] = [
        Self::Abstract,
        Self::Authors,
        Self::Date,
        Self::Doi,
        Self::PdfUrl,
        Self::Provider,
        Self::ProviderData,
        Self::ProviderUrl,
        Self::Title,
        Self::TotalCitations,
        Self::TotalReferences,
        Self::Url,
        Self::Year,
    ];

    /// Value sent on the wire.
    #[must_use]
    pub const fn value(self) -> &'static str {
        match self {
            Self::Abstract => "abstract",
            Self::Authors => "authors",
            Self::Date => "date",
            Self::Doi => "doi",
            Self::PdfUrl => "pdfURL",
            Self::Provider => "provider",
            Self::ProviderData => "providerData",
            Self::ProviderUrl => "providerURL",
            Self::Title => "title",
            Self::TotalCitations => "totalCitations",
            Self::TotalReferences => "totalReferences",
            Self::Url => "url",
            Self::Year => "year",
        }
    }

    /// Label shown to users.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Abstract => "Abstract",
            Self::Authors => "Authors",
            Self::Date => "Date",
            Self::Doi => "DOI",
            Self::PdfUrl => "PDF URL",
            Self::Provider => "Provider",
            Self::ProviderData => "Provider Data",
            Self::ProviderUrl => "Provider URL",
            Self::Title => "Title",
            Self::TotalCitations => "Total Citations",
            Self::TotalReferences => "Total References",
            Self::Url => "URL",
            Self::Year => "Year",
        }
    }
}

/// LLM strategy for `document/parse`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UseLlm {
    /// Let the service decide (1-2 credits per page).
    #[default]
    Auto,
    /// Always parse with an LLM (2 credits per page).
    Always,
    /// Never parse with an LLM (1 credit per page).
    Never,
}

impl UseLlm {
    /// All strategies, in the order the node lists them.
    pub const ALL: [Self; 3] = [Self::Auto, Self::Always, Self::Never];

    /// Value sent on the wire.
    #[must_use]
    pub const fn value(self) -> &'static str {
        match self {
            Self::Auto => "auto",
            Self::Always => "always",
            Self::Never => "never",
        }
    }

    /// Label shown to users.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Auto => "Auto",
            Self::Always => "Always",
            Self::Never => "Never",
        }
    }

    /// Credit cost shown next to the option.
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Auto => "Automatically decide if LLM parsing is needed (1-2 credits per page)",
            Self::Always => "Always use LLM parsing (2 credits per page)",
            Self::Never => "Never use LLM parsing (1 credit per page)",
        }
    }
}

/// File type for `document/upload`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileType {
    #[default]
    Pdf,
    Docx,
}

impl FileType {
    /// All file types, in the order the node lists them.
    pub const ALL: [Self; 2] = [Self::Pdf, Self::Docx];

    /// Value sent on the wire.
    #[must_use]
    pub const fn value(self) -> &'static str {
        match self {
            Self::Pdf => "pdf",
            Self::Docx => "docx",
        }
    }

    /// Label shown to users.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Pdf => "PDF",
            Self::Docx => "Word",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_values_match_serde() {
        for provider in Provider::ALL {
            assert_eq!(serde_json::to_value(provider).unwrap(), provider.value());
        }
        for field in PublicationField::ALL {
            assert_eq!(serde_json::to_value(field).unwrap(), field.value());
        }
        for strategy in UseLlm::ALL {
            assert_eq!(serde_json::to_value(strategy).unwrap(), strategy.value());
        }
        for file_type in FileType::ALL {
            assert_eq!(serde_json::to_value(file_type).unwrap(), file_type.value());
        }
    }

    #[test]
    fn test_defaults() {
        assert_eq!(Provider::default(), Provider::SemanticScholar);
        assert_eq!(UseLlm::default(), UseLlm::Auto);
        assert_eq!(FileType::default(), FileType::Pdf);
    }

    #[test]
    fn test_unknown_value_rejected() {
        assert!(serde_json::from_value::<FileType>(serde_json::json!("txt")).is_err());
        assert!(serde_json::from_value::<PublicationField>(serde_json::json!("pdfUrl")).is_err());
    }
}
