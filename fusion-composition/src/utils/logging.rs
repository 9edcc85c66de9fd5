/// Wraps `tracing::trace!` so that composition logs carry serialized copies of the data that
/// drives a run. Not related to snapshot testing.
///
/// Passing an identifier tags the event with the value's type name and serializes it with
/// serde_json:
/// ```ignore
/// snapshot!(config, "composition configuration");
/// // trace!(snapshot = "CompositionConfig", data = "{ .. }", "composition configuration");
/// ```
/// Passing a name tag and data uses the data as is. It must implement tracing's `Value` trait:
/// ```ignore
/// snapshot!("FusionTypeNames", names.join(","), "registered names");
/// ```
macro_rules! snapshot {
    ($value:expr, $msg:literal) => {
        #[cfg(feature = "snapshot_tracing")]
        tracing::trace!(
            snapshot = std::any::type_name_of_val(&$value),
            data = serde_json::to_string(&$value).expect(concat!(
                "Could not serialize value for a snapshot with message: ",
                $msg
            )),
            $msg
        );
    };
    ($name:literal, $value:expr, $msg:literal) => {
        #[cfg(feature = "snapshot_tracing")]
        tracing::trace!(snapshot = $name, data = $value, $msg);
    };
}

pub(crate) use snapshot;
