//! Single-directive editing.
//!
//! Responsibilities:
//! - Read, set, unset and reset one option by its directive name.
//! - Validate new values with the same decoders the parser uses.
//!
//! Does NOT handle:
//! - Writing the result back to disk (see `persistence`).
//!
//! Invariants:
//! - An edit either applies completely or leaves the configuration untouched.
//! - Setting a list option appends; an element already present is not added twice.
//! - Every edit stays representable in the canonical file: values never
//!   contain line breaks, and an option whose default is non-empty is never
//!   left empty (the file would read it back as the default).

use crate::codec::{decode_bool, decode_uint, split_joined};
use crate::constants::{NO, YES};
use crate::error::{Accepted, EditError};
use crate::schema::{DefaultValue, ListStyle, OptionSpec, lookup};
use crate::types::{ApptainerConf, FieldView, Slot};

fn spec_for(directive: &str) -> Result<&'static OptionSpec, EditError> {
    lookup(directive).ok_or_else(|| EditError::UnknownDirective(directive.to_string()))
}

fn invalid(spec: &OptionSpec, value: &str, accepted: Accepted) -> EditError {
    EditError::Invalid {
        directive: spec.directive.to_string(),
        value: value.to_string(),
        accepted,
    }
}

/// Refuse to empty an option whose empty state reads back as its default.
fn ensure_storable_when_empty(spec: &OptionSpec) -> Result<(), EditError> {
    let reverts = match spec.default {
        DefaultValue::Text(text) => !text.is_empty(),
        DefaultValue::List(items) => !items.is_empty(),
        _ => false,
    };
    if reverts {
        return Err(EditError::EmptyRevertsToDefault {
            directive: spec.directive.to_string(),
            default: spec.default.to_text().unwrap_or_default(),
        });
    }
    Ok(())
}

/// Elements named by `value` for a list option of the given style.
fn list_elements(style: Option<ListStyle>, value: &str) -> Vec<String> {
    match style {
        Some(ListStyle::Joined) => split_joined(value),
        _ if value.is_empty() => Vec::new(),
        _ => vec![value.to_string()],
    }
}

/// Current value(s) of `directive`, spelled as the file would spell them.
///
/// List options yield one entry per element; an unset scalar yields nothing.
///
/// # Errors
///
/// Returns [`EditError::UnknownDirective`] for a name absent from the catalog.
pub fn get_directive(conf: &ApptainerConf, directive: &str) -> Result<Vec<String>, EditError> {
    let spec = spec_for(directive)?;
    let values = match spec.view(conf) {
        FieldView::Bool(value) => vec![if value { YES } else { NO }.to_string()],
        FieldView::Uint(value) => vec![value.to_string()],
        FieldView::Choice(token) => vec![token.to_string()],
        FieldView::Text(value) if value.is_empty() => Vec::new(),
        FieldView::Text(value) => vec![value.to_string()],
        FieldView::List(items) => items.to_vec(),
    };
    Ok(values)
}

/// Set `directive` to `value`.
///
/// Scalars are replaced. List options gain the given element (joined-line
/// lists accept several comma-separated elements at once).
///
/// # Errors
///
/// Returns [`EditError::UnknownDirective`] for a name absent from the catalog,
/// [`EditError::Invalid`] when the value fails validation and
/// [`EditError::EmptyRevertsToDefault`] when an empty value could not be stored.
pub fn set_directive(conf: &mut ApptainerConf, directive: &str, value: &str) -> Result<(), EditError> {
    let spec = spec_for(directive)?;
    if value.contains(['\n', '\r']) {
        return Err(invalid(spec, value, Accepted::SingleLine));
    }
    let value = value.trim();

    match spec.slot(conf) {
        Slot::Bool(slot) => *slot = decode_bool(value).map_err(|a| invalid(spec, value, a))?,
        Slot::Uint(slot) => *slot = decode_uint(value).map_err(|a| invalid(spec, value, a))?,
        Slot::Choice(slot) => slot
            .assign(value)
            .map_err(|e| invalid(spec, value, Accepted::OneOf(e.accepted)))?,
        Slot::Text(slot) => {
            if value.is_empty() {
                ensure_storable_when_empty(spec)?;
            }
            *slot = value.to_string();
        }
        Slot::List(slot) => {
            let elements = list_elements(spec.list_style(), value);
            if elements.is_empty() {
                return Err(invalid(spec, value, Accepted::NonEmpty));
            }
            for element in elements {
                if slot.contains(&element) {
                    tracing::debug!(directive = spec.directive, %element, "Element already present");
                } else {
                    slot.push(element);
                }
            }
        }
    }
    tracing::debug!(directive = spec.directive, value, "Directive set");
    Ok(())
}

/// Remove `value` from a list option, or revert the option to its default.
///
/// With `Some(value)` on a list option every matching element is removed.
/// Without a value, or for a non-list option, this is [`reset_directive`].
///
/// # Errors
///
/// Returns [`EditError::UnknownDirective`] for a name absent from the catalog
/// and [`EditError::EmptyRevertsToDefault`] when the removal would empty a
/// list whose default is non-empty.
pub fn unset_directive(
    conf: &mut ApptainerConf,
    directive: &str,
    value: Option<&str>,
) -> Result<(), EditError> {
    let spec = spec_for(directive)?;
    if let (Some(value), Slot::List(slot)) = (value, spec.slot(conf)) {
        let elements = list_elements(spec.list_style(), value.trim());
        let remaining = slot.iter().filter(|item| !elements.contains(item)).count();
        if remaining == slot.len() {
            tracing::debug!(directive = spec.directive, value, "Nothing to remove");
            return Ok(());
        }
        if remaining == 0 {
            ensure_storable_when_empty(spec)?;
        }
        slot.retain(|item| !elements.contains(item));
        return Ok(());
    }
    reset_directive(conf, directive)
}

/// Revert `directive` to its catalog default.
///
/// # Errors
///
/// Returns [`EditError::UnknownDirective`] for a name absent from the catalog.
pub fn reset_directive(conf: &mut ApptainerConf, directive: &str) -> Result<(), EditError> {
    let spec = spec_for(directive)?;
    spec.apply_default(conf);
    tracing::debug!(directive = spec.directive, "Directive reset to default");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_spells_values_like_the_file() {
        let conf = ApptainerConf::default();
        assert_eq!(get_directive(&conf, "allow setuid").unwrap(), vec!["yes"]);
        assert_eq!(get_directive(&conf, "enable overlay").unwrap(), vec!["try"]);
        assert_eq!(get_directive(&conf, "max loop devices").unwrap(), vec!["256"]);
        assert!(get_directive(&conf, "image driver").unwrap().is_empty());
        assert_eq!(
            get_directive(&conf, "bind path").unwrap(),
            vec!["/etc/localtime", "/etc/hosts"]
        );
    }

    #[test]
    fn test_unknown_directive() {
        let mut conf = ApptainerConf::default();
        assert_eq!(
            set_directive(&mut conf, "allow teleport", "yes"),
            Err(EditError::UnknownDirective("allow teleport".to_string()))
        );
    }

    #[test]
    fn test_invalid_value_leaves_configuration_untouched() {
        let mut conf = ApptainerConf::default();
        let err = set_directive(&mut conf, "mount dev", "bogus").unwrap_err();
        assert_eq!(
            err,
            EditError::Invalid {
                directive: "mount dev".to_string(),
                value: "bogus".to_string(),
                accepted: Accepted::OneOf(&["yes", "no", "minimal"]),
            }
        );
        assert_eq!(conf, ApptainerConf::default());
    }

    #[test]
    fn test_set_rejects_line_breaks() {
        let mut conf = ApptainerConf::default();
        let err = set_directive(&mut conf, "image driver", "a\nallow setuid = no").unwrap_err();
        assert!(matches!(
            err,
            EditError::Invalid {
                accepted: Accepted::SingleLine,
                ..
            }
        ));
    }

    #[test]
    fn test_set_scalar_replaces() {
        let mut conf = ApptainerConf::default();
        set_directive(&mut conf, "download concurrency", "8").unwrap();
        set_directive(&mut conf, "image driver", "squashfuse").unwrap();
        assert_eq!(conf.download_concurrency, 8);
        assert_eq!(conf.image_driver, "squashfuse");
    }

    #[test]
    fn test_set_list_appends_without_duplicates() {
        let mut conf = ApptainerConf::default();
        set_directive(&mut conf, "bind path", "/scratch").unwrap();
        set_directive(&mut conf, "bind path", "/scratch").unwrap();
        assert_eq!(conf.bind_path, vec!["/etc/localtime", "/etc/hosts", "/scratch"]);

        set_directive(&mut conf, "limit container owners", "alice, bob").unwrap();
        set_directive(&mut conf, "limit container owners", "bob,carol").unwrap();
        assert_eq!(conf.limit_container_owners, vec!["alice", "bob", "carol"]);
    }

    #[test]
    fn test_set_list_rejects_empty_element() {
        let mut conf = ApptainerConf::default();
        assert!(set_directive(&mut conf, "allow net users", " , ").is_err());
        assert!(set_directive(&mut conf, "bind path", "").is_err());
    }

    #[test]
    fn test_unset_list_element() {
        let mut conf = ApptainerConf::default();
        unset_directive(&mut conf, "bind path", Some("/etc/hosts")).unwrap();
        assert_eq!(conf.bind_path, vec!["/etc/localtime"]);

        conf.allow_net_groups = vec!["a".into(), "b".into(), "c".into()];
        unset_directive(&mut conf, "allow net groups", Some("a, c")).unwrap();
        assert_eq!(conf.allow_net_groups, vec!["b"]);
    }

    #[test]
    fn test_unset_refuses_to_empty_defaulted_list() {
        let mut conf = ApptainerConf::default();
        unset_directive(&mut conf, "bind path", Some("/etc/hosts")).unwrap();
        let err = unset_directive(&mut conf, "bind path", Some("/etc/localtime")).unwrap_err();
        assert_eq!(
            err,
            EditError::EmptyRevertsToDefault {
                directive: "bind path".to_string(),
                default: "/etc/localtime, /etc/hosts".to_string(),
            }
        );
        assert_eq!(conf.bind_path, vec!["/etc/localtime"]);
    }

    #[test]
    fn test_unset_may_empty_list_without_default() {
        let mut conf = ApptainerConf::default();
        conf.allow_net_users = vec!["alice".into()];
        unset_directive(&mut conf, "allow net users", Some("alice")).unwrap();
        assert!(conf.allow_net_users.is_empty());
    }

    #[test]
    fn test_set_refuses_empty_text_with_default() {
        let mut conf = ApptainerConf::default();
        let err = set_directive(&mut conf, "binary path", "  ").unwrap_err();
        assert!(matches!(err, EditError::EmptyRevertsToDefault { .. }));
        assert_eq!(conf, ApptainerConf::default());

        conf.image_driver = "squashfuse".to_string();
        set_directive(&mut conf, "image driver", "").unwrap();
        assert!(conf.image_driver.is_empty());
    }

    #[test]
    fn test_unset_without_value_restores_default() {
        let mut conf = ApptainerConf::default();
        conf.mount_hostfs = true;
        conf.bind_path.clear();
        unset_directive(&mut conf, "mount hostfs", None).unwrap();
        unset_directive(&mut conf, "bind path", None).unwrap();
        assert_eq!(conf, ApptainerConf::default());
    }

    #[test]
    fn test_reset_clears_option_without_default() {
        let mut conf = ApptainerConf::default();
        conf.mksquashfs_mem = "1G".to_string();
        reset_directive(&mut conf, "mksquashfs mem").unwrap();
        assert!(conf.mksquashfs_mem.is_empty());
    }
}
