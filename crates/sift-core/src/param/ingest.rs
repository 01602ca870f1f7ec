//! Ingest-domain parameters.

use crate::param::{bool_param, text_param};

bool_param! {
    /// If true, a missing source field is ignored instead of failing the
    /// document.
    IgnoreMissingParam, "ignore_missing", default = false
}

bool_param! {
    /// If true, a processor failure is ignored and the pipeline continues.
    IgnoreFailureParam, "ignore_failure", default = false
}

bool_param! {
    /// If false, a field that already exists (and is non-null) is left
    /// untouched.
    OverrideParam, "override", default = true
}

text_param! {
    /// Field to assign the processed value to, when it differs from the
    /// source field.
    TargetFieldParam, "target_field"
}

text_param! {
    /// Human-readable note attached to the processor.
    DescriptionParam, "description"
}
