//! Abstract markup sanitization
//!
//! Removes the known wrapper tags and embedded copyright clauses that
//! bibliographic abstracts carry. The tag vocabulary is fixed and
//! compiled in; anything outside it is only caught by the generic
//! tag stripper. Best-effort recovery, not a markup parser.

use crate::error::Result;
use crate::scanner::skip_spans;
use regex::Regex;

/// The fixed markup vocabulary targeted by the sanitizer.
///
/// Not data-driven: these are the wrapper forms observed in the record
/// fields, in both their original and lower-cased spellings (upstream
/// normalization lower-cases some fields before they reach us).
#[derive(Debug, Clone)]
pub struct TagVocabulary {
    /// Opening marker of an attributed abstract wrapper, e.g. `<AbstractText Label="...">`
    pub abstract_open_prefix: String,
    /// End marker closing a tag span
    pub tag_close: String,
    /// Start of an embedded copyright clause
    pub copyright_prefix: String,
    /// Terminator of a copyright clause
    pub clause_terminator: String,
    /// Literal wrapper substrings deleted outright, in application order
    pub literal_removals: Vec<String>,
}

impl Default for TagVocabulary {
    fn default() -> Self {
        Self {
            abstract_open_prefix: "<AbstractText ".to_string(),
            tag_close: ">".to_string(),
            copyright_prefix: "Copyright ".to_string(),
            clause_terminator: ".".to_string(),
            // Order matters: bracketed forms before the unterminated
            // "<abstracttext" prefix, copyright-information tags before
            // the bare word.
            literal_removals: [
                "<abstracttext>",
                "<abstracttext",
                "<AbstractText>",
                "<copyrightinformation>",
                "</copyrightinformation>",
                "<CopyrightInformation>",
                "</CopyrightInformation>",
                "copyright",
                "Copyright",
                "</AbstractText>",
                "</abstracttext>",
                "<abstract>",
                "</abstract>",
                "<Abstract>",
                "</Abstract>",
            ]
            .iter()
            .map(|s| s.to_string())
            .collect(),
        }
    }
}

/// Sanitizer for abstract fields, built on the skip-scan primitive.
#[derive(Debug, Clone)]
pub struct MarkupSanitizer {
    vocab: TagVocabulary,
    attributed_wrapper: Regex,
}

impl Default for MarkupSanitizer {
    fn default() -> Self {
        Self::new(TagVocabulary::default())
    }
}

impl MarkupSanitizer {
    /// Creates a sanitizer over the given vocabulary.
    pub fn new(vocab: TagVocabulary) -> Self {
        // Attributed wrapper forms such as `<abstracttext label="x">`
        // reaching the literal pass directly (via remove_wrapper_tags)
        // are deleted by pattern rather than one literal per attribute.
        let attributed_wrapper =
            Regex::new(r"(?i)<abstracttext[^>]*>").expect("attributed wrapper pattern is valid");
        Self {
            vocab,
            attributed_wrapper,
        }
    }

    /// Sanitizes one abstract field.
    ///
    /// Steps, in order: collapse double spaces; guarantee a clause
    /// terminator before the first closing tag when a copyright notice
    /// is present; skip attributed abstract wrapper tags; skip the
    /// copyright clause up to its sentence period; delete the remaining
    /// fixed wrapper forms.
    ///
    /// Returns [`crate::Error::UnterminatedSpan`] when a wrapper or
    /// clause never closes; callers should treat that as a failure of
    /// the single record, not of the corpus pass.
    pub fn sanitize_abstract(&self, text: &str) -> Result<String> {
        let mut text = text.replace("  ", "");

        // A clause with no period before the closing tag would make the
        // clause scan run to the end of the field. Insert the terminator
        // up front so the scan always has one.
        if text.contains("Copyright") && !text.contains(".</") {
            if let Some(close) = text.find("</") {
                text.insert(close, '.');
            }
        }

        let text = skip_spans(&text, &self.vocab.abstract_open_prefix, &self.vocab.tag_close)?;
        // Heuristic: the clause is assumed to end at the next literal
        // period. Abbreviations like "Inc." inside the clause truncate
        // the skip early and leave a remnant.
        let text = skip_spans(
            &text,
            &self.vocab.copyright_prefix,
            &self.vocab.clause_terminator,
        )?;

        Ok(self.remove_wrapper_tags(&text))
    }

    /// Deletes the fixed wrapper forms, then any attributed abstract
    /// wrapper tag left over, without touching other markup.
    pub fn remove_wrapper_tags(&self, text: &str) -> String {
        // The pattern runs first: the bare "<abstracttext" literal would
        // otherwise strand the attribute list of an attributed wrapper.
        let mut text = self.attributed_wrapper.replace_all(text, "").into_owned();
        for tag in &self.vocab.literal_removals {
            text = text.replace(tag.as_str(), "");
        }
        text
    }

    /// Strips every well-formed `<...>` span, keeping all other content.
    ///
    /// Coarser than [`Self::sanitize_abstract`]: tag types are not
    /// distinguished and no clause excision happens.
    pub fn strip_all_tags(&self, text: &str) -> Result<String> {
        skip_spans(text, "<", &self.vocab.tag_close)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sanitizes_attributed_abstract_with_copyright_clause() {
        let sanitizer = MarkupSanitizer::default();
        let out = sanitizer
            .sanitize_abstract(
                "<AbstractText Label=\"RESULTS\">Some finding. Copyright 2014 Elsevier.</AbstractText>",
            )
            .unwrap();
        assert!(out.contains("Some finding."), "kept content lost: {out:?}");
        assert!(!out.contains("Copyright"));
        assert!(!out.contains("AbstractText"));
    }

    #[test]
    fn inserts_terminator_when_copyright_clause_has_none() {
        let sanitizer = MarkupSanitizer::default();
        let out = sanitizer
            .sanitize_abstract("<AbstractText Label=\"X\">Finding. Copyright 2015 Wiley</AbstractText>")
            .unwrap();
        assert!(out.contains("Finding."));
        assert!(!out.contains("Copyright"));
    }

    #[test]
    fn removes_lowercased_wrapper_forms() {
        let sanitizer = MarkupSanitizer::default();
        let out = sanitizer
            .sanitize_abstract("<abstracttext>body text</abstracttext>")
            .unwrap();
        assert_eq!(out, "body text");
    }

    #[test]
    fn removes_attributed_lowercased_wrapper() {
        let sanitizer = MarkupSanitizer::default();
        let out = sanitizer
            .sanitize_abstract("<abstracttext label=\"BACKGROUND\">intro</abstracttext>")
            .unwrap();
        assert_eq!(out, "intro");
    }

    #[test]
    fn wrapper_pass_alone_handles_attributed_forms() {
        let sanitizer = MarkupSanitizer::default();
        let out = sanitizer.remove_wrapper_tags("<abstracttext label=\"METHODS\">kept");
        assert_eq!(out, "kept");
    }

    #[test]
    fn removes_copyright_information_tags() {
        let sanitizer = MarkupSanitizer::default();
        let out = sanitizer
            .sanitize_abstract("text<copyrightinformation>2013 Springer.</copyrightinformation>")
            .unwrap();
        assert!(!out.contains("copyrightinformation"));
    }

    #[test]
    fn double_spaces_collapse_before_scanning() {
        let sanitizer = MarkupSanitizer::default();
        let out = sanitizer.sanitize_abstract("a  b").unwrap();
        assert_eq!(out, "ab");
    }

    #[test]
    fn unterminated_wrapper_is_a_record_failure() {
        let sanitizer = MarkupSanitizer::default();
        assert!(sanitizer
            .sanitize_abstract("<AbstractText Label=\"X\" no closing bracket")
            .is_err());
    }

    #[test]
    fn tag_free_unterminated_copyright_clause_is_a_record_failure() {
        // With no closing tag in the field there is nowhere to plant a
        // terminator, so a clause that never reaches a period fails the
        // record rather than truncating it silently.
        let sanitizer = MarkupSanitizer::default();
        let err = sanitizer
            .sanitize_abstract("finding Copyright 2014 Elsevier")
            .unwrap_err();
        assert!(matches!(err, crate::Error::UnterminatedSpan { .. }));
    }

    #[test]
    fn strip_all_tags_is_noop_on_tag_free_text() {
        let sanitizer = MarkupSanitizer::default();
        let text = "no markup here at all";
        assert_eq!(sanitizer.strip_all_tags(text).unwrap(), text);
    }

    #[test]
    fn strip_all_tags_removes_arbitrary_tags() {
        let sanitizer = MarkupSanitizer::default();
        assert_eq!(
            sanitizer
                .strip_all_tags("<Journal>Nature</Journal> <Title>On Cells</Title>")
                .unwrap(),
            "Nature On Cells"
        );
    }
}
