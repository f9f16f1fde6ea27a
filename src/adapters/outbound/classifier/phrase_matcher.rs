use crate::ports::outbound::{LicenseMatch, LicenseMatcher, MatchKind};
use crate::shared::Result;
use aho_corasick::AhoCorasick;
use std::collections::BTreeMap;

const SPDX_TAG: &str = "SPDX-License-Identifier:";

const SPDX_CONFIDENCE: f32 = 1.0;
const PHRASE_CONFIDENCE: f32 = 0.9;
const COPYRIGHT_CONFIDENCE: f32 = 1.0;

/// A license is recognized when every `required` phrase occurs and no
/// `excluded` phrase does. Phrases are lowercase with single spaces.
struct PhraseRule {
    name: &'static str,
    required: &'static [&'static str],
    excluded: &'static [&'static str],
}

const RULES: &[PhraseRule] = &[
    PhraseRule {
        name: "MIT",
        required: &[
            "permission is hereby granted, free of charge",
            "the above copyright notice and this permission notice shall be included",
        ],
        excluded: &[],
    },
    PhraseRule {
        name: "ISC",
        required: &[
            "with or without fee is hereby granted",
            "disclaims all warranties with regard to this software",
        ],
        excluded: &[],
    },
    PhraseRule {
        name: "BSD-3-Clause",
        required: &[
            "redistribution and use in source and binary forms, with or without modification",
            "to endorse or promote products derived from this software",
        ],
        excluded: &[],
    },
    PhraseRule {
        name: "BSD-2-Clause",
        required: &["redistribution and use in source and binary forms, with or without modification"],
        excluded: &["to endorse or promote products derived from this software"],
    },
    PhraseRule {
        name: "Apache-2.0",
        required: &["apache license version 2.0, january 2004"],
        excluded: &[],
    },
    PhraseRule {
        name: "Apache-2.0",
        required: &["licensed under the apache license, version 2.0"],
        excluded: &[],
    },
    PhraseRule {
        name: "MPL-2.0",
        required: &["mozilla public license version 2.0"],
        excluded: &[],
    },
    PhraseRule {
        name: "MPL-2.0",
        required: &["mozilla public license, v. 2.0"],
        excluded: &[],
    },
    PhraseRule {
        name: "Unlicense",
        required: &["this is free and unencumbered software released into the public domain"],
        excluded: &[],
    },
    PhraseRule {
        name: "CC-BY-SA-4.0",
        required: &["attribution-sharealike 4.0 international"],
        excluded: &[],
    },
    PhraseRule {
        name: "Python-2.0",
        required: &["python software foundation license version 2"],
        excluded: &[],
    },
    PhraseRule {
        name: "GPL-2.0",
        required: &["gnu general public license version 2, june 1991"],
        excluded: &[],
    },
    PhraseRule {
        name: "GPL-3.0",
        required: &["gnu general public license version 3, 29 june 2007"],
        excluded: &[],
    },
    PhraseRule {
        name: "LGPL-2.1",
        required: &["gnu lesser general public license version 2.1, february 1999"],
        excluded: &[],
    },
    PhraseRule {
        name: "LGPL-3.0",
        required: &["gnu lesser general public license version 3, 29 june 2007"],
        excluded: &[],
    },
    PhraseRule {
        name: "AGPL-3.0",
        required: &["gnu affero general public license version 3, 19 november 2007"],
        excluded: &[],
    },
];

/// PhraseLicenseMatcher adapter recognizing licenses by canonical phrases
///
/// All phrases of all rules are searched in a single aho-corasick pass over
/// the whitespace-normalized text. Besides phrase rules it reports
/// `SPDX-License-Identifier:` tags verbatim and copyright statements.
///
/// Matches come out as: SPDX tags in file order, then phrase rules ordered
/// by where their first required phrase occurs, then copyright lines.
pub struct PhraseLicenseMatcher {
    automaton: AhoCorasick,
    phrases: Vec<&'static str>,
}

impl PhraseLicenseMatcher {
    /// Builds the automaton over every rule phrase
    ///
    /// # Errors
    /// Returns an error if aho-corasick cannot build the automaton
    pub fn new() -> Result<Self> {
        let mut phrases: Vec<&'static str> = Vec::new();
        for rule in RULES {
            for phrase in rule.required.iter().chain(rule.excluded) {
                if !phrases.contains(phrase) {
                    phrases.push(*phrase);
                }
            }
        }

        let automaton = AhoCorasick::builder()
            .ascii_case_insensitive(true)
            .build(&phrases)
            .map_err(|e| anyhow::anyhow!("Failed to build license phrase matcher: {}", e))?;

        Ok(Self { automaton, phrases })
    }

    /// First offset of every phrase present in `text`, keyed by phrase
    fn phrase_positions(&self, text: &str) -> BTreeMap<&'static str, usize> {
        let mut positions = BTreeMap::new();
        for found in self.automaton.find_overlapping_iter(text) {
            let phrase = self.phrases[found.pattern().as_usize()];
            positions.entry(phrase).or_insert(found.start());
        }
        positions
    }

    fn rule_matches(&self, text: &str) -> Vec<LicenseMatch> {
        let positions = self.phrase_positions(text);

        let mut hits: Vec<(usize, &'static str)> = RULES
            .iter()
            .filter(|rule| rule.excluded.iter().all(|p| !positions.contains_key(p)))
            .filter_map(|rule| {
                rule.required
                    .iter()
                    .map(|p| positions.get(p).copied())
                    .collect::<Option<Vec<usize>>>()
                    .and_then(|offsets| offsets.into_iter().min())
                    .map(|offset| (offset, rule.name))
            })
            .collect();
        hits.sort_by_key(|(offset, _)| *offset);

        hits.into_iter()
            .map(|(_, name)| LicenseMatch::new(name, MatchKind::License, PHRASE_CONFIDENCE))
            .collect()
    }
}

impl LicenseMatcher for PhraseLicenseMatcher {
    fn find_matches(&self, content: &[u8]) -> Vec<LicenseMatch> {
        let text = String::from_utf8_lossy(content);

        let mut matches = spdx_matches(&text);
        matches.extend(self.rule_matches(&normalize_whitespace(&text)));
        matches.extend(copyright_matches(&text));
        matches
    }
}

/// Collapses every whitespace run to a single space
fn normalize_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn spdx_matches(text: &str) -> Vec<LicenseMatch> {
    text.lines()
        .filter_map(|line| {
            let (_, rest) = line.split_once(SPDX_TAG)?;
            let identifier = rest.trim().trim_end_matches("*/").trim();
            (!identifier.is_empty()).then(|| {
                LicenseMatch::new(identifier, MatchKind::License, SPDX_CONFIDENCE)
            })
        })
        .collect()
}

fn copyright_matches(text: &str) -> Vec<LicenseMatch> {
    text.lines()
        .map(str::trim)
        .filter(|line| is_copyright_statement(line))
        .map(|line| LicenseMatch::new(line, MatchKind::Copyright, COPYRIGHT_CONFIDENCE))
        .collect()
}

fn is_copyright_statement(line: &str) -> bool {
    let lower = line.to_lowercase();
    let Some(rest) = lower.strip_prefix("copyright") else {
        return line.starts_with('©');
    };
    rest.starts_with(" (c)") || rest.starts_with(" ©") || rest.starts_with(" 1") || rest.starts_with(" 2")
}
