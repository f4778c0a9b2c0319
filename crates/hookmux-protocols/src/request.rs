//! Dispatch request contract types.

use std::any::Any;
use std::fmt;
use std::sync::Arc;

/// Opaque handle to a value owned by the host runtime.
///
/// The composition core forwards these untouched; only participants
/// know the concrete types behind them and downcast as needed.
#[derive(Clone)]
pub struct HostValue(Arc<dyn Any + Send + Sync>);

impl HostValue {
    /// Wrap a host-owned value.
    pub fn new<T: Any + Send + Sync>(value: T) -> Self {
        Self(Arc::new(value))
    }

    /// Downcast to a concrete host type.
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.0.downcast_ref()
    }
}

impl fmt::Debug for HostValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("HostValue(..)")
    }
}

/// The nine runtime-supplied parameters of one artifact generation
/// request.
///
/// Bundled into a single type so the contract probed at registration
/// and the call made at dispatch cannot drift apart.
#[derive(Clone, Debug)]
pub struct MakeRequest {
    /// Lookup context of the code instantiating the closure.
    pub caller: HostValue,

    /// Name of the represented method.
    pub invoked_name: String,

    /// Type descriptor of the factory method.
    pub invoked_type: HostValue,

    /// Type descriptor of the represented method.
    pub sam_type: HostValue,

    /// Handle to the implementation target method.
    pub impl_method: HostValue,

    /// Specialized type descriptor of the represented method.
    pub instantiated_type: HostValue,

    /// Whether the generated closure must be serializable.
    pub serializable: bool,

    /// Marker interface descriptors, in declaration order.
    pub marker_interfaces: Vec<HostValue>,

    /// Additional bridge method descriptors, in declaration order.
    pub additional_bridges: Vec<HostValue>,
}

impl MakeRequest {
    /// Create a request with empty marker and bridge lists.
    pub fn new(
        caller: HostValue,
        invoked_name: impl Into<String>,
        invoked_type: HostValue,
        sam_type: HostValue,
        impl_method: HostValue,
        instantiated_type: HostValue,
        serializable: bool,
    ) -> Self {
        Self {
            caller,
            invoked_name: invoked_name.into(),
            invoked_type,
            sam_type,
            impl_method,
            instantiated_type,
            serializable,
            marker_interfaces: Vec::new(),
            additional_bridges: Vec::new(),
        }
    }

    /// Set the marker interface descriptors.
    pub fn with_marker_interfaces(mut self, marker_interfaces: Vec<HostValue>) -> Self {
        self.marker_interfaces = marker_interfaces;
        self
    }

    /// Set the additional bridge method descriptors.
    pub fn with_additional_bridges(mut self, additional_bridges: Vec<HostValue>) -> Self {
        self.additional_bridges = additional_bridges;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_host_value_downcast() {
        let value = HostValue::new("lookup-context".to_string());
        assert_eq!(
            value.downcast_ref::<String>().map(String::as_str),
            Some("lookup-context")
        );
        assert!(value.downcast_ref::<u32>().is_none());
    }

    #[test]
    fn test_host_value_clone_shares_payload() {
        let value = HostValue::new(42u64);
        let clone = value.clone();
        assert_eq!(clone.downcast_ref::<u64>(), Some(&42));
    }

    #[test]
    fn test_make_request_new_defaults() {
        let request = MakeRequest::new(
            HostValue::new(()),
            "apply",
            HostValue::new(()),
            HostValue::new(()),
            HostValue::new(()),
            HostValue::new(()),
            false,
        );
        assert_eq!(request.invoked_name, "apply");
        assert!(!request.serializable);
        assert!(request.marker_interfaces.is_empty());
        assert!(request.additional_bridges.is_empty());
    }

    #[test]
    fn test_make_request_builders() {
        let request = MakeRequest::new(
            HostValue::new(()),
            "accept",
            HostValue::new(()),
            HostValue::new(()),
            HostValue::new(()),
            HostValue::new(()),
            true,
        )
        .with_marker_interfaces(vec![HostValue::new("Marker".to_string())])
        .with_additional_bridges(vec![HostValue::new("bridge".to_string()), HostValue::new(())]);

        assert!(request.serializable);
        assert_eq!(request.marker_interfaces.len(), 1);
        assert_eq!(request.additional_bridges.len(), 2);
    }
}
