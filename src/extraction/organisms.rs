//! Organism definition extraction.
//!
//! `ORGANISM <name> { ... }` blocks are located by their header; the body is
//! bounded with a balanced-span scan so nested META/GENE blocks (and any
//! brace pairs inside gene definitions) cannot truncate it.

use std::collections::BTreeMap;

use regex::Regex;

use super::span::balanced_span;
use super::text::{TextCleaner, truncate_chars};
use crate::error::Result;
use crate::models::organism::{Gene, Organism};

/// Compiled organism patterns.
pub struct OrganismPatterns {
    header: Regex,
    meta: Regex,
    gene: Regex,
}

impl OrganismPatterns {
    pub fn compile() -> Result<Self> {
        Ok(Self {
            header: Regex::new(r"ORGANISM\s+(\w+)\s*\{")?,
            meta: Regex::new(r"META\s*\{")?,
            gene: Regex::new(r"GENE\s+(\w+)\s*\{")?,
        })
    }

    /// Extract all organisms in document order. Missing META or GENE blocks
    /// yield empty meta/genes, not errors.
    pub fn extract(
        &self,
        content: &str,
        excerpt_chars: usize,
        cleaner: &TextCleaner,
    ) -> Vec<Organism> {
        let mut organisms = Vec::new();

        for caps in self.header.captures_iter(content) {
            let Some(header) = caps.get(0) else { continue };
            // The header pattern ends on the opening brace.
            let Some(body_span) = balanced_span(content, header.end() - 1) else {
                continue;
            };
            let body = &content[body_span];

            organisms.push(Organism {
                name: caps[1].to_string(),
                meta: self.parse_meta(body, cleaner),
                genes: self.parse_genes(body, cleaner),
                excerpt: truncate_chars(body, excerpt_chars).to_string(),
            });
        }

        organisms
    }

    /// META 块：冒号分隔的键值行，值两侧引号剥除
    fn parse_meta(&self, body: &str, cleaner: &TextCleaner) -> BTreeMap<String, String> {
        let mut meta = BTreeMap::new();

        let Some(header) = self.meta.find(body) else {
            return meta;
        };
        let Some(span) = balanced_span(body, header.end() - 1) else {
            return meta;
        };

        for line in body[span].lines() {
            if let Some((key, value)) = line.split_once(':') {
                let value = value.trim().trim_matches(|c| c == '"' || c == '\'');
                meta.insert(cleaner.clean(key), cleaner.clean(value));
            }
        }

        meta
    }

    fn parse_genes(&self, body: &str, cleaner: &TextCleaner) -> Vec<Gene> {
        let mut genes = Vec::new();

        for caps in self.gene.captures_iter(body) {
            let Some(header) = caps.get(0) else { continue };
            let Some(span) = balanced_span(body, header.end() - 1) else {
                continue;
            };
            genes.push(Gene {
                name: caps[1].to_string(),
                definition: cleaner.clean(&body[span]),
            });
        }

        genes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extract(content: &str) -> Vec<Organism> {
        let patterns = OrganismPatterns::compile().unwrap();
        let cleaner = TextCleaner::compile().unwrap();
        patterns.extract(content, 500, &cleaner)
    }

    #[test]
    fn test_organism_with_meta_and_gene() {
        let organisms = extract(r#"ORGANISM Foo { META { a: "x" } GENE g1 { def1 } }"#);

        assert_eq!(organisms.len(), 1);
        let organism = &organisms[0];
        assert_eq!(organism.name, "Foo");
        assert_eq!(organism.meta.get("a").map(String::as_str), Some("x"));
        assert_eq!(organism.genes.len(), 1);
        assert_eq!(organism.genes[0].name, "g1");
        assert_eq!(organism.genes[0].definition, "def1");
    }

    #[test]
    fn test_nested_braces_inside_gene_definition() {
        let organisms = extract("ORGANISM Bar { GENE g { if {x} then y } }\ntrailer");

        assert_eq!(organisms.len(), 1);
        assert_eq!(organisms[0].genes[0].definition, "if {x} then y");
        // The outer block must end at its own closing brace, not the first one.
        assert!(organisms[0].excerpt.contains("if {x} then y"));
        assert!(!organisms[0].excerpt.contains("trailer"));
    }

    #[test]
    fn test_missing_meta_and_genes() {
        let organisms = extract("ORGANISM Empty { nothing structured here }");

        assert_eq!(organisms.len(), 1);
        assert!(organisms[0].meta.is_empty());
        assert!(organisms[0].genes.is_empty());
    }

    #[test]
    fn test_unclosed_body_is_skipped() {
        assert!(extract("ORGANISM Broken { GENE g { def ").is_empty());
    }

    #[test]
    fn test_multiline_meta_block() {
        let content = "ORGANISM Cell {\n  META {\n    version: \"2.0\"\n    state: conscious\n  }\n}";
        let organisms = extract(content);

        assert_eq!(
            organisms[0].meta.get("version").map(String::as_str),
            Some("2.0")
        );
        assert_eq!(
            organisms[0].meta.get("state").map(String::as_str),
            Some("conscious")
        );
    }

    #[test]
    fn test_excerpt_is_truncated() {
        let long_body = "x".repeat(800);
        let organisms = extract(&format!("ORGANISM Big {{ {} }}", long_body));

        assert_eq!(organisms[0].excerpt.chars().count(), 500);
    }
}
