//! Splitting of fused colloquial forms.
//!
//! Informal English glues some word pairs together ("cannot", "gonna").
//! [`SplitFormsFilter`] breaks them apart the way the Penn Treebank
//! tokenization does, so "cannot" shares the "can" term with "can you help
//! me". Only whole, lowercase tokens are matched.

use std::sync::LazyLock;

use ahash::AHashMap;

use crate::analysis::token::{Token, TokenStream};
use crate::analysis::token_filter::Filter;
use crate::error::Result;

/// Fused forms and the two tokens each one splits into.
const FUSED_FORMS: &[(&str, &str, &str)] = &[
    ("cannot", "can", "not"),
    ("gimme", "gim", "me"),
    ("gonna", "gon", "na"),
    ("gotta", "got", "ta"),
    ("lemme", "lem", "me"),
    ("wanna", "wan", "na"),
];

static SPLITS: LazyLock<AHashMap<&'static str, (&'static str, &'static str)>> =
    LazyLock::new(|| {
        FUSED_FORMS
            .iter()
            .map(|&(form, head, tail)| (form, (head, tail)))
            .collect()
    });

/// A filter that splits fused forms into two tokens and renumbers positions.
#[derive(Clone, Debug, Default)]
pub struct SplitFormsFilter;

impl SplitFormsFilter {
    /// Create a new split filter.
    pub fn new() -> Self {
        SplitFormsFilter
    }
}

impl Filter for SplitFormsFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        let mut filtered_tokens = Vec::new();

        for token in tokens {
            match SPLITS.get(token.text.as_str()) {
                Some(&(head, tail)) => {
                    filtered_tokens.push(Token::new(head, filtered_tokens.len()));
                    filtered_tokens.push(Token::new(tail, filtered_tokens.len()));
                }
                None => {
                    let position = filtered_tokens.len();
                    filtered_tokens.push(Token { position, ..token });
                }
            }
        }

        Ok(Box::new(filtered_tokens.into_iter()))
    }

    fn name(&self) -> &'static str {
        "split_forms"
    }
}
