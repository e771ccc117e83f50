//! Informational pages (privacy policy, terms of use)
//!
//! Static Hebrew content, one ordered list of numbered sections per page.

mod content;

use chrono::Datelike;
use serde::Serialize;
use shared::error::{AppError, AppResult, ErrorCode};
use std::fmt::Write;

/// Legal entity named in every page footer
pub const COMPANY_NAME: &str = "איי איי די קאן יל בע\"מ";

/// Title of the scroll-to-top button
pub const SCROLL_UP_TITLE: &str = "חזרה למעלה";

/// Scroll offset (px) past which the scroll-to-top button appears
pub const SCROLL_UP_THRESHOLD: f64 = 300.0;

/// Whether the scroll-to-top button is visible at `offset`
pub fn show_scroll_up(offset: f64) -> bool {
    offset > SCROLL_UP_THRESHOLD
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Section {
    pub number: u8,
    pub title: &'static str,
    pub paragraphs: &'static [&'static str],
    /// Bullet list, rendered after the first paragraph
    pub items: &'static [&'static str],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct InfoPage {
    pub route: &'static str,
    pub title: &'static str,
    pub sections: &'static [Section],
}

pub const PRIVACY: InfoPage = InfoPage {
    route: "/privacy",
    title: "מדיניות פרטיות",
    sections: content::PRIVACY_SECTIONS,
};

pub const TERMS: InfoPage = InfoPage {
    route: "/terms",
    title: "תנאי שימוש",
    sections: content::TERMS_SECTIONS,
};

pub const PAGES: [InfoPage; 2] = [PRIVACY, TERMS];

impl InfoPage {
    /// Look up a page by route (`/privacy`) or bare name (`privacy`)
    pub fn find(route: &str) -> AppResult<Self> {
        let name = route.trim().trim_start_matches('/');
        PAGES
            .iter()
            .find(|page| page.route.trim_start_matches('/') == name)
            .copied()
            .ok_or_else(|| {
                AppError::with_message(ErrorCode::PageNotFound, format!("No page at {}", route))
                    .with_detail("route", route)
            })
    }

    pub fn footer(year: i32) -> String {
        format!("© {} {}. כל הזכויות שמורות.", year, COMPANY_NAME)
    }

    /// Plain-text rendering with a "last updated" line for `today`
    pub fn render(&self, today: chrono::NaiveDate) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "{}", self.title);
        let _ = writeln!(out, "עודכן לאחרונה: {}", today.format("%d/%m/%Y"));

        for section in self.sections {
            let _ = writeln!(out);
            let _ = writeln!(out, "{}. {}", section.number, section.title);
            let mut paragraphs = section.paragraphs.iter();
            if let Some(first) = paragraphs.next() {
                let _ = writeln!(out, "{}", first);
            }
            for item in section.items {
                let _ = writeln!(out, "  • {}", item);
            }
            for paragraph in paragraphs {
                let _ = writeln!(out, "{}", paragraph);
            }
        }

        let _ = writeln!(out);
        let _ = writeln!(out, "{}", Self::footer(today.year()));
        out
    }
}
