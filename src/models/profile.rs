use serde::Serialize;

/// A personal/professional bio record.
///
/// All fields borrow `'static` data so a profile can live in a `const` and be
/// shared by reference across concurrent requests without synchronization.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct Profile {
    /// Full display name.
    pub name: &'static str,
    /// One-line professional headline (e.g., "Data Engineer | Azure | SQL").
    pub headline: &'static str,
    /// City and state/region.
    pub location: &'static str,
    /// Short paragraph shown under the header.
    pub summary: &'static str,
    /// Core skills, in display order.
    pub core_expertise: &'static [&'static str],
    /// Areas of current focus, in display order.
    pub current_focus: &'static [&'static str],
    /// Status line shown in the header pill.
    pub status: &'static str,
}
