// src/lookup.rs
//
// Company lookup: identifier → (legal name, CAE).

use crate::{
    config::{consts::*, options::ClientOptions},
    core::{html::{self, LabelCell}, net::HttpSession},
    error::LookupError,
};

/// What a successful lookup yields. Fields may hold their per-field fallback text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CompanyInfo {
    pub name: String,
    pub activity_code: String,
    /// True when at least one field fell back because its label was missing.
    pub degraded: bool,
}

impl CompanyInfo {
    pub fn new(name: impl Into<String>, activity_code: impl Into<String>) -> Self {
        Self { name: name.into(), activity_code: activity_code.into(), degraded: false }
    }
}

/// Anything that can resolve one identifier. The pipeline only sees this.
pub trait Lookup {
    fn fetch(&mut self, nif: &str) -> Result<CompanyInfo, LookupError>;
}

impl<F> Lookup for F
where
    F: FnMut(&str) -> Result<CompanyInfo, LookupError>,
{
    fn fetch(&mut self, nif: &str) -> Result<CompanyInfo, LookupError> {
        self(nif)
    }
}

/// "Find the cell labelled `label`, read the next one; else use `fallback`."
/// A label with nothing after it is a broken page, not a missing field.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ExtractionRule {
    pub label: &'static str,
    pub fallback: &'static str,
}

impl ExtractionRule {
    /// Resolve a looked-up value, falling back when the label is absent.
    /// The flag is true on fallback.
    pub fn resolve(&self, found: LabelCell) -> Result<(String, bool), LookupError> {
        match found {
            LabelCell::Value(v) => Ok((v, false)),
            LabelCell::Missing => {
                logd!("Label {:?} not on page, using {:?}", self.label, self.fallback);
                Ok((s!(self.fallback), true))
            }
            LabelCell::NoValueCell => Err(LookupError::Parse { label: self.label }),
        }
    }
}

pub const NAME_RULE: ExtractionRule = ExtractionRule { label: LABEL_NAME, fallback: NAME_NOT_FOUND };
pub const CAE_RULE: ExtractionRule = ExtractionRule { label: LABEL_CAE, fallback: CAE_NOT_FOUND };

/// Apply the name and CAE rules to a company page. A missing label only degrades its
/// own field; a label with no cell after it fails the whole lookup.
pub fn parse_company(doc: &str) -> Result<CompanyInfo, LookupError> {
    let mut found = html::values_after_labels(doc, &[NAME_RULE.label, CAE_RULE.label]).into_iter();
    let (name, name_fell_back) = NAME_RULE.resolve(found.next().unwrap_or(LabelCell::Missing))?;
    let (activity_code, cae_fell_back) = CAE_RULE.resolve(found.next().unwrap_or(LabelCell::Missing))?;

    Ok(CompanyInfo { name, activity_code, degraded: name_fell_back || cae_fell_back })
}

/// The live einforma.pt client. Owns its HTTP session for its whole lifetime.
///
/// `fetch` does not pause: the 2 s spacing between requests comes from the
/// `Throttle` in `pipeline::enrich`. Callers driving the client directly must
/// pace themselves.
pub struct EInformaClient {
    session: HttpSession,
    opts: ClientOptions,
}

impl EInformaClient {
    pub fn new(opts: ClientOptions) -> Result<Self, LookupError> {
        let session = HttpSession::new(&opts.user_agent)?;
        Ok(Self { session, opts })
    }

    pub fn url_for(&self, nif: &str) -> String {
        self.opts.url_for(nif)
    }
}

impl Lookup for EInformaClient {
    fn fetch(&mut self, nif: &str) -> Result<CompanyInfo, LookupError> {
        let url = self.url_for(nif);
        logd!("GET {}", url);
        let body = self.session.get_text(&url)?;
        parse_company(&body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn both_labels_present() {
        let doc = "<table><tr><td>Denominação:</td><td>Acme Lda</td></tr>\
                   <tr><td>Atividade (CAE):</td><td>6201</td></tr></table>";
        assert_eq!(parse_company(doc).unwrap(), CompanyInfo::new("Acme Lda", "6201"));
    }

    #[test]
    fn missing_cae_only_degrades_cae() {
        let doc = "<table><tr><td>Denominação:</td><td>Acme Lda</td></tr></table>";
        let info = parse_company(doc).unwrap();
        assert_eq!(info.name, "Acme Lda");
        assert_eq!(info.activity_code, CAE_NOT_FOUND);
        assert!(info.degraded);
    }

    #[test]
    fn empty_page_falls_back_on_both() {
        let info = parse_company("").unwrap();
        assert_eq!(info.name, NAME_NOT_FOUND);
        assert_eq!(info.activity_code, CAE_NOT_FOUND);
        assert!(info.degraded);
    }

    #[test]
    fn label_without_following_cell_fails_the_lookup() {
        // CAE reads fine, but the name label is the last cell on the page.
        let doc = "<table><tr><td>Atividade (CAE):</td><td>6201</td><td>Denominação:</td></tr></table>";
        match parse_company(doc) {
            Err(LookupError::Parse { label }) => assert_eq!(label, LABEL_NAME),
            other => panic!("expected parse error, got {other:?}"),
        }
    }

    #[test]
    fn blank_value_cell_is_kept_empty() {
        let doc = "<table><tr><td>Denominação:</td><td>  </td></tr>\
                   <tr><td>Atividade (CAE):</td><td>6201</td></tr></table>";
        let info = parse_company(doc).unwrap();
        assert_eq!(info.name, "");
        assert_eq!(info.activity_code, "6201");
        assert!(!info.degraded);
    }

    #[test]
    fn url_substitutes_nif_verbatim() {
        let client = EInformaClient::new(ClientOptions::default()).unwrap();
        assert_eq!(
            client.url_for("0501 23"),
            "https://www.einforma.pt/servlet/app/portal/ENTP/prod/ETIQUETA_EMPRESA/nif/0501 23/source/search/campaign/fichaemp/"
        );
    }

    #[test]
    fn closures_are_lookups() {
        let mut calls = Vec::new();
        let mut f = |nif: &str| {
            calls.push(s!(nif));
            Ok::<_, LookupError>(CompanyInfo::new("N", "C"))
        };
        assert!(Lookup::fetch(&mut f, "1").is_ok());
        assert_eq!(calls, vec!["1"]);
    }
}
