/// Returned when a field-resolution context reaches a
/// [`ScopedFieldResolver`](crate::ScopedFieldResolver) without a
/// request-level service provider attached.
///
/// This is a configuration fault of the calling execution engine and is
/// fatal to that single field resolution. No fallback provider is consulted
/// and nothing is retried; sibling field resolutions are unaffected.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, thiserror::Error)]
#[error(
    "No request-level services are available on this field-resolution \
    context. Attach a service provider to the execution before using scoped \
    field resolvers."
)]
pub struct MissingRequestServicesError;
