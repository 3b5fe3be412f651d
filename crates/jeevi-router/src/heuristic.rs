// SPDX-FileCopyrightText: 2026 Jeevi Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Lexical math detection.
//!
//! Mathematical queries split between two backends: those that look
//! like actual math go to the chat model, the rest take the default
//! path. This check is lexical only, no provider call.

/// Math keyword patterns (contains, case-insensitive).
const MATH_KEYWORDS: &[&str] = &[
    "calculate",
    "solve",
    "equation",
    "math",
    "arithmetic",
    "algebra",
    "geometry",
    "calculus",
    "trigonometry",
    "statistics",
    "probability",
    "derivative",
    "integral",
    "matrix",
    "vector",
];

/// Math symbols (any single occurrence counts).
const MATH_SYMBOLS: &str = "+-*/^√∫∑∏≈≠≤≥∠πεδ";

/// Returns true when the query contains a math keyword or symbol.
pub fn is_mathematical(query: &str) -> bool {
    let lower = query.to_lowercase();
    if MATH_KEYWORDS.iter().any(|k| lower.contains(k)) {
        return true;
    }
    query.chars().any(|c| MATH_SYMBOLS.contains(c))
}
