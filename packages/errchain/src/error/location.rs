//! Call-site capture for error frames

use super::types::Location;

impl Location {
    /// Build a location from explicit parts
    #[must_use]
    pub const fn new(file: &'static str, line: u32, function: Option<&'static str>) -> Self {
        Self {
            file,
            line,
            function,
        }
    }

    /// Location of the caller, without a function name.
    ///
    /// Use [`here!`](crate::here) when the enclosing function name should be recorded too.
    #[track_caller]
    #[must_use]
    pub fn caller() -> Self {
        let caller = std::panic::Location::caller();
        Self::new(caller.file(), caller.line(), None)
    }

    /// Source file as given by the compiler
    #[must_use]
    pub fn file(&self) -> &'static str {
        self.file
    }

    /// File name without its directories
    #[must_use]
    pub fn basename(&self) -> &'static str {
        self.file
            .rsplit(|c| c == '/' || c == '\\')
            .next()
            .unwrap_or(self.file)
    }

    /// Source line
    #[must_use]
    pub fn line(&self) -> u32 {
        self.line
    }

    /// Enclosing function, if it was captured
    #[must_use]
    pub fn function(&self) -> Option<&'static str> {
        self.function
    }
}

/// Strip the path and any closure suffixes from a `type_name` of a nested item.
#[doc(hidden)]
#[must_use]
pub fn trim_function_path(path: &'static str) -> &'static str {
    let mut name = path.strip_suffix("::__here").unwrap_or(path);
    while let Some(outer) = name.strip_suffix("::{{closure}}") {
        name = outer;
    }
    name.rsplit("::").next().unwrap_or(name)
}

/// Name of the enclosing function, as a `&'static str`
#[macro_export]
macro_rules! function_name {
    () => {{
        fn __here() {}
        fn __type_name_of<T>(_: T) -> &'static str {
            ::core::any::type_name::<T>()
        }
        $crate::error::location::trim_function_path(__type_name_of(__here))
    }};
}

/// [`Location`] of the macro invocation, including the enclosing function name
#[macro_export]
macro_rules! here {
    () => {
        $crate::Location::new(file!(), line!(), Some($crate::function_name!()))
    };
}
