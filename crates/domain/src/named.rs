//! Display-name access across entity kinds.
//!
//! Every world entity exposes its human-readable name through one trait
//! instead of callers probing per-kind field names. Validation rules that
//! scan "anything with a name" are written once against this seam.

/// Uniform access to an entity's identity and display name.
pub trait NamedEntity {
    /// The name shown to authors and players. May be empty while an entity
    /// is mid-edit; emptiness is a validation finding, not a construction
    /// error.
    fn display_name(&self) -> &str;

    /// The entity's stable identifier, as an opaque string.
    fn entity_id(&self) -> &str;

    /// Entity kind label used in messages ("Character", "Location", ...).
    fn kind(&self) -> &'static str;
}
