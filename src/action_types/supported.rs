use serde::{Deserialize, Serialize};

use super::Operation;

macro_rules! supported_actions {
    ($( $(#[$attr:meta])* $field:ident => $operation:ident ),* $(,)?) => {
        /// Which operation kinds a resource generates action types for.
        ///
        /// Every kind defaults to enabled; a JSON config only needs to list
        /// the kinds it turns off.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
        #[serde(default, rename_all = "camelCase")]
        pub struct SupportedActions {
            $( $(#[$attr])* pub $field: bool, )*
        }

        impl Default for SupportedActions {
            fn default() -> Self {
                Self { $( $field: true, )* }
            }
        }

        impl SupportedActions {
            /// Every operation kind disabled.
            pub fn none() -> Self {
                Self { $( $field: false, )* }
            }

            pub fn is_supported(&self, operation: Operation) -> bool {
                match operation {
                    $( Operation::$operation => self.$field, )*
                }
            }

            paste::paste! {
                $(
                    /// Builder-style toggle for one operation kind.
                    pub fn [<with_ $field>](mut self, enabled: bool) -> Self {
                        self.$field = enabled;
                        self
                    }
                )*
            }
        }
    };
}

supported_actions! {
    create => Create,
    create_many => CreateMany,
    read => Read,
    read_many => ReadMany,
    update => Update,
    update_many => UpdateMany,
    #[serde(alias = "del")]
    delete => Delete,
    #[serde(alias = "delMany")]
    delete_many => DeleteMany,
}

impl SupportedActions {
    pub fn enabled(&self) -> impl Iterator<Item = Operation> + '_ {
        Operation::ALL
            .into_iter()
            .filter(move |operation| self.is_supported(*operation))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn everything_is_enabled_by_default() {
        assert_eq!(SupportedActions::default().enabled().count(), 8);
        assert_eq!(SupportedActions::none().enabled().count(), 0);
    }

    #[test]
    fn json_config_accepts_legacy_delete_keys() {
        let supported: SupportedActions = serde_json::from_value(json!({
            "create": false,
            "del": false,
            "delMany": false
        }))
        .unwrap();

        assert!(!supported.is_supported(Operation::Create));
        assert!(!supported.is_supported(Operation::Delete));
        assert!(!supported.is_supported(Operation::DeleteMany));
        assert!(supported.is_supported(Operation::ReadMany));
    }

    #[test]
    fn builder_toggles_single_kinds() {
        let supported = SupportedActions::none().with_read_many(true);
        assert_eq!(supported.enabled().collect::<Vec<_>>(), vec![Operation::ReadMany]);
    }
}
