//! Derivation of dotted caller identifiers from the call stack.
//!
//! [`CallerResolver`] walks the current thread's stack, selects the frame
//! `skip` levels above whoever called it, and renders that frame as
//! `module.Type.function`. Components that cannot be determined are left out,
//! so a free function yields `module.function` and a frame without symbol
//! information yields the empty string.
//!
//! Frame counting starts at a private never-inlined capture routine located by
//! its own symbol name. Frames belonging to the stack walker itself therefore
//! never shift the count, but the resolver depends on symbol names being
//! available: stripped binaries resolve every frame to the empty identifier.
//!
//! The `Self` type is recognised by Rust naming conventions. Associated
//! functions without a receiver (`Type::new`) are reported with their type
//! like methods, and a module whose name starts with an uppercase letter is
//! taken for a type.
//!
//! Optimised builds may merge functions whose compiled bodies are identical
//! into one symbol. A frame of a merged function then resolves to the name of
//! whichever function the linker kept, not to an empty identifier. Names are
//! exact only when function merging is off, as in debug builds.

mod file_path;
mod symbol;

use std::fmt;
use std::hint::black_box;
use std::path::{Path, PathBuf};

use self::symbol::SymbolPath;

/// Where the module component of a caller identifier comes from.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ModuleSource {
    /// The demangled symbol path of the frame (`crate::module::function`).
    #[default]
    Symbol,
    /// The frame's source file, relative to the nearest `src`, `tests`,
    /// `benches` or `examples` directory. Useful when symbol paths are
    /// unreliable but line tables survive, and requires debug info.
    FilePath,
}

/// Components identifying one stack frame.
#[derive(Clone, Debug, Default, Eq, Hash, PartialEq)]
pub struct CallerIdentity {
    module: Vec<String>,
    type_name: Option<String>,
    function: Option<String>,
}

impl CallerIdentity {
    /// Module path components, outermost first.
    #[must_use]
    pub fn module(&self) -> &[String] {
        &self.module
    }

    /// The `Self` type when the frame is a method.
    #[must_use]
    pub fn type_name(&self) -> Option<&str> {
        self.type_name.as_deref()
    }

    /// The function name, absent for frames that are not named functions.
    #[must_use]
    pub fn function(&self) -> Option<&str> {
        self.function.as_deref()
    }

    /// Reports whether no component could be determined.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.module.is_empty() && self.type_name.is_none() && self.function.is_none()
    }
}

impl fmt::Display for CallerIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let components = self
            .module
            .iter()
            .map(String::as_str)
            .chain(self.type_name.as_deref())
            .chain(self.function.as_deref());
        for (index, component) in components.enumerate() {
            if index > 0 {
                f.write_str(".")?;
            }
            f.write_str(component)?;
        }
        Ok(())
    }
}

/// Resolves the identity of a calling stack frame.
///
/// `skip` counts frames above the immediate caller of the resolving method:
/// `0` names the function that calls [`resolve`](Self::resolve), `1` names
/// its caller, and so on. A `skip` beyond the depth of the stack yields the
/// empty identifier.
///
/// Resolution walks the stack on every call; nothing is cached.
///
/// In optimised builds two functions with identical bodies can share one
/// symbol, and either of them is then reported under the other's name. Names
/// are exact only when function merging is off, as in debug builds.
///
/// # Examples
///
/// ```
/// use logging_helpers::CallerResolver;
///
/// #[inline(never)]
/// fn connect() -> String {
///     CallerResolver::new().resolve(0)
/// }
///
/// assert!(connect().ends_with("connect"));
/// ```
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CallerResolver {
    /// Source of the module component.
    pub module_source: ModuleSource,
}

impl CallerResolver {
    /// Creates a resolver reading modules from symbol paths.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            module_source: ModuleSource::Symbol,
        }
    }

    /// Selects where the module component comes from.
    #[must_use]
    pub const fn module_source(mut self, source: ModuleSource) -> Self {
        self.module_source = source;
        self
    }

    /// Returns the components of the frame `skip` levels above the caller.
    #[inline(never)]
    #[must_use]
    pub fn identify(self, skip: usize) -> CallerIdentity {
        black_box(capture(self, skip.saturating_add(1)))
    }

    /// Returns the dotted identifier of the frame `skip` levels above the
    /// caller, or an empty string when it cannot be determined.
    #[inline(never)]
    #[must_use]
    pub fn resolve(self, skip: usize) -> String {
        black_box(self.identify(skip.saturating_add(1))).to_string()
    }
}

/// Dotted identifier of the function `skip` frames above the caller, using
/// the default [`CallerResolver`].
///
/// ```
/// use logging_helpers::caller_name;
///
/// struct Widget;
///
/// impl Widget {
///     #[inline(never)]
///     fn render(&self) -> String {
///         caller_name(0)
///     }
/// }
///
/// assert!(Widget.render().ends_with("Widget.render"));
/// assert_eq!(caller_name(usize::MAX), "");
/// ```
#[inline(never)]
#[must_use]
pub fn caller_name(skip: usize) -> String {
    black_box(CallerResolver::new().resolve(skip.saturating_add(1)))
}

/// Walks the stack and decomposes the frame `depth` levels above the frame
/// that called this function.
#[inline(never)]
fn capture(resolver: CallerResolver, depth: usize) -> CallerIdentity {
    const ANCHOR: &str = concat!(module_path!(), "::capture");

    let mut seen_after_anchor: Option<usize> = None;
    let mut target: Option<(Option<String>, Option<PathBuf>)> = None;

    backtrace::trace(|frame| {
        backtrace::resolve_frame(frame, |symbol| {
            if target.is_some() {
                return;
            }
            let name = symbol.name().map(|name| format!("{name:#}"));
            match seen_after_anchor.as_mut() {
                None => {
                    if name.as_deref() == Some(ANCHOR) {
                        seen_after_anchor = Some(0);
                    }
                }
                Some(seen) if *seen == depth => {
                    target = Some((name, symbol.filename().map(Path::to_path_buf)));
                }
                Some(seen) => *seen += 1,
            }
        });
        target.is_none()
    });

    match target {
        Some((Some(name), file)) => decompose(resolver, &name, file.as_deref()),
        _ => CallerIdentity::default(),
    }
}

/// Builds the identity of a frame from its symbol name and, when line info is
/// available, its source file.
fn decompose(resolver: CallerResolver, name: &str, file: Option<&Path>) -> CallerIdentity {
    let SymbolPath {
        module,
        type_name,
        function,
    } = SymbolPath::parse(name);

    let module = match (resolver.module_source, file) {
        (ModuleSource::FilePath, Some(file)) => file_path::module_path(file),
        (ModuleSource::FilePath, None) => Vec::new(),
        (ModuleSource::Symbol, _) => module,
    };

    CallerIdentity {
        module,
        type_name,
        function,
    }
}
