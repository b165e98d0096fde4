/// Declares one or more enum families.
///
/// Each family is a newtype over [`Enum`](crate::Enum) that gets the whole capability
/// contract: [`Enummer`](crate::Enummer), [`FromEnum`](crate::FromEnum), `Display`,
/// transparent serde, and rusqlite `ToSql`/`FromSql`. Since every family is its own
/// type, `==` between two families does not compile.
///
/// ```
/// use structenum::{enum_family, Enummer};
///
/// enum_family! {
///     /// State of a build.
///     pub struct BuildState(String);
///     pub struct ExitCode(i32);
/// }
///
/// const CRASHED: ExitCode = ExitCode::new(139);
/// let passed = BuildState::new("passed".to_string());
/// assert_eq!(passed.text(), "passed");
/// assert!(CRASHED.equal_value(&139));
/// ```
#[macro_export]
macro_rules! enum_family {
    ($($(#[$meta:meta])* $vis:vis struct $name:ident($scalar:ty);)+) => {
        $(
            $(#[$meta])*
            #[derive(Clone, Debug, PartialEq, Eq, Hash)]
            $vis struct $name($crate::Enum<$scalar>);

            impl $name {
                #[allow(dead_code)]
                $vis const fn new(value: $scalar) -> Self {
                    Self($crate::Enum::new(value))
                }
            }

            impl $crate::Enummer for $name {
                type Value = $scalar;
                fn inner(&self) -> &$crate::Enum<$scalar> {
                    &self.0
                }
                fn family(&self) -> $crate::Family {
                    $crate::Family::of::<$name>()
                }
            }
            impl $crate::FromEnum for $name {
                fn from_enum(inner: $crate::Enum<$scalar>) -> Self {
                    Self(inner)
                }
            }

            impl ::std::fmt::Display for $name {
                fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                    ::std::fmt::Display::fmt(&self.0, f)
                }
            }

            impl $crate::__private::serde::Serialize for $name {
                fn serialize<S>(&self, serializer: S) -> ::std::result::Result<S::Ok, S::Error>
                where
                    S: $crate::__private::serde::Serializer,
                {
                    $crate::__private::serde::Serialize::serialize(&self.0, serializer)
                }
            }
            impl<'de> $crate::__private::serde::Deserialize<'de> for $name {
                fn deserialize<D>(deserializer: D) -> ::std::result::Result<Self, D::Error>
                where
                    D: $crate::__private::serde::Deserializer<'de>,
                {
                    <$crate::Enum<$scalar> as $crate::__private::serde::Deserialize<'de>>::deserialize(deserializer)
                        .map(Self)
                }
            }

            impl $crate::__private::rusqlite::types::ToSql for $name {
                fn to_sql(
                    &self,
                ) -> $crate::__private::rusqlite::Result<$crate::__private::rusqlite::types::ToSqlOutput<'_>> {
                    $crate::__private::rusqlite::types::ToSql::to_sql(&self.0)
                }
            }
            impl $crate::__private::rusqlite::types::FromSql for $name {
                fn column_result(
                    value: $crate::__private::rusqlite::types::ValueRef<'_>,
                ) -> $crate::__private::rusqlite::types::FromSqlResult<Self> {
                    <$crate::Enum<$scalar> as $crate::__private::rusqlite::types::FromSql>::column_result(value)
                        .map(Self)
                }
            }
        )+
    };
}
