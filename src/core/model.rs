// Linkfolio - core/model.rs
//
// Core data model types. Pure data definitions with no I/O and no
// platform dependencies (core depends on std and serde only).
//
// These types are the shared vocabulary across all layers.

use serde::{Deserialize, Serialize};

// =============================================================================
// Profile Record
// =============================================================================

/// One person's public portfolio entry.
///
/// This is the unit that flows through discovery, detail lookup, sharing
/// and persistence. The user's own profile and the built-in provider
/// directory share this shape; only the user's own record is ever mutated
/// or persisted.
///
/// All fields tolerate absence when deserialising an older stored blob:
/// a missing key loads as the field's default value, never a failed load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileRecord {
    /// Stable identifier, unique across my profile and the directory.
    #[serde(default)]
    pub id: String,

    /// Full display name.
    #[serde(default)]
    pub name: String,

    /// Short free-text introduction.
    #[serde(default)]
    pub bio: String,

    /// Single-line profession or category label (e.g. "Design Odyssey").
    /// Discovery matches search text and category heuristics against this.
    #[serde(default)]
    pub domain: String,

    /// Comma-delimited skills as raw text, not a structured set.
    /// Split on ',' at display time via [`ProfileRecord::skill_list`].
    #[serde(default)]
    pub skills: String,

    /// Avatar image URI. Opaque and unvalidated.
    #[serde(default)]
    pub avatar: String,

    /// Optional display accent colour (e.g. "#D49CFF").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,

    /// Social links. Replaced wholesale by updates, never merged per-field.
    #[serde(default)]
    pub links: SocialLinks,
}

/// External profile links. Free-text URLs, unvalidated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLinks {
    /// GitHub profile URL.
    #[serde(default)]
    pub github: String,

    /// LinkedIn profile URL.
    #[serde(default)]
    pub linkedin: String,
}

impl ProfileRecord {
    /// Returns the shallow merge of this record and a partial update.
    ///
    /// Fields present in the update replace the prior value; absent fields
    /// keep it. `links` is a single field for this purpose: a present value
    /// replaces the entire nested object, so callers updating one social
    /// link must supply a complete [`SocialLinks`].
    pub fn apply_update(&self, update: ProfileUpdate) -> ProfileRecord {
        ProfileRecord {
            id: update.id.unwrap_or_else(|| self.id.clone()),
            name: update.name.unwrap_or_else(|| self.name.clone()),
            bio: update.bio.unwrap_or_else(|| self.bio.clone()),
            domain: update.domain.unwrap_or_else(|| self.domain.clone()),
            skills: update.skills.unwrap_or_else(|| self.skills.clone()),
            avatar: update.avatar.unwrap_or_else(|| self.avatar.clone()),
            color: update.color.or_else(|| self.color.clone()),
            links: update.links.unwrap_or_else(|| self.links.clone()),
        }
    }

    /// Skills split on ',' with surrounding whitespace trimmed.
    ///
    /// Empty entries are preserved; the skills field is free text and no
    /// invariant forces its entries to be non-empty.
    pub fn skill_list(&self) -> Vec<&str> {
        self.skills.split(',').map(str::trim).collect()
    }

    /// Text before the first space of `name`, for informal greetings.
    pub fn first_name(&self) -> &str {
        self.name.split(' ').next().unwrap_or_default()
    }
}

// =============================================================================
// Profile Update (partial)
// =============================================================================

/// A partial profile edit: one `Option` per top-level field.
///
/// `None` means "keep the current value". Applied via
/// [`ProfileRecord::apply_update`], which documents the shallow-merge
/// contract for `links`. A `color` can be set but not cleared through an
/// update; absence keeps the prior accent.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProfileUpdate {
    pub id: Option<String>,
    pub name: Option<String>,
    pub bio: Option<String>,
    pub domain: Option<String>,
    pub skills: Option<String>,
    pub avatar: Option<String>,
    pub color: Option<String>,
    pub links: Option<SocialLinks>,
}

// =============================================================================
// Category
// =============================================================================

/// Discovery categories, in display order.
///
/// The category rail is fixed; matching against profile domains (including
/// the alias rules for `Logic` and `Visual`) lives in `core::filter`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    #[default]
    All,
    Logic,
    Visual,
    Focus,
    Web,
}

impl Category {
    /// Returns all variants in display order.
    pub fn all() -> &'static [Category] {
        &[
            Category::All,
            Category::Logic,
            Category::Visual,
            Category::Focus,
            Category::Web,
        ]
    }

    /// Stable lowercase identifier, also the literal matched against
    /// profile domains.
    pub fn id(&self) -> &'static str {
        match self {
            Category::All => "all",
            Category::Logic => "logic",
            Category::Visual => "visual",
            Category::Focus => "focus",
            Category::Web => "web",
        }
    }

    /// Human-readable label for display.
    pub fn label(&self) -> &'static str {
        match self {
            Category::All => "All",
            Category::Logic => "Logic",
            Category::Visual => "Visual",
            Category::Focus => "Focus",
            Category::Web => "Web",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

// =============================================================================
// Course Record
// =============================================================================

/// One featured course shown on the home feed. Read-only catalogue data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseRecord {
    /// Catalogue identifier.
    pub id: String,

    /// Course title.
    pub title: String,

    /// Author display name.
    pub author: String,

    /// Raw progress text in "completed/total" form (e.g. "2/3").
    pub progress: String,

    /// Cover image URI. Opaque and unvalidated, like profile avatars.
    pub image: String,

    /// Display accent colour.
    pub color: String,
}

impl CourseRecord {
    /// Parses the raw progress text into (completed, total).
    ///
    /// Returns `None` when the text is not two '/'-separated integers;
    /// progress is display data and carries no invariant.
    pub fn progress_parts(&self) -> Option<(u32, u32)> {
        let (done, total) = self.progress.split_once('/')?;
        Some((done.trim().parse().ok()?, total.trim().parse().ok()?))
    }
}

// =============================================================================
// Tests
// =============================================================================
