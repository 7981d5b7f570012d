use crate::resolver::CancellationToken;
use crate::resolver::PathSegment;
use crate::resolver::ResolvedValue;
use crate::resolver::ServiceProvider;
use indexmap::IndexMap;
use std::sync::Arc;

/// Read access to the ambient state of one field resolution.
///
/// The execution engine owns the implementation; resolvers only read from
/// it. Accessors may be backed by mutable or lazily computed engine state,
/// so wrappers over a context must delegate calls rather than snapshot
/// values.
pub trait ResolveFieldContext: Send + Sync {
    /// Name of the field being resolved.
    fn field_name(&self) -> &str;

    /// Coerced argument values for this field, in document order.
    fn arguments(&self) -> &IndexMap<String, ResolvedValue>;

    /// The already-resolved parent value, if any.
    fn parent_value(&self) -> Option<&ResolvedValue>;

    /// Response path from the operation root down to this field.
    fn path(&self) -> &[PathSegment];

    /// Cooperative cancellation signal for the whole execution.
    fn cancellation_token(&self) -> &CancellationToken;

    /// The request-level service provider, when the caller configured one.
    fn request_services(&self) -> Option<Arc<dyn ServiceProvider>>;
}
