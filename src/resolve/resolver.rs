//! The precedence resolver.

use crate::document::{DocumentFormat, JsonFormat, LoadResult, SettingsDocument};
use crate::options::{HelpCatalogue, OptionRegistry, ParsedArguments, tokenize};
use crate::settings::{FieldError, FieldMap, Settings, bind, from_fields, overlay, to_fields};

use super::{Outcome, OverrideDetection, Persist, PersistStatus, Resolved, Source};

/// Fields after applying the command line, plus which fields were assigned.
struct CommandLine {
    fields: FieldMap,
    assigned: Vec<String>,
}

/// Resolves one settings schema from defaults, its document section, and
/// an argument vector.
///
/// # Precedence
///
/// From lowest to highest:
///
/// 1. Schema defaults, or in-app defaults when supplied
/// 2. The persisted document section
/// 3. Command-line assignments
///
/// `--reset` returns schema defaults, `--ignore` skips the document for both
/// reading and writing, and `--help` stops with [`Outcome::Help`].
///
/// # Example
///
/// ```no_run
/// use layered_settings::document::SettingsDocument;
/// use layered_settings::options::OptionRegistry;
/// use layered_settings::resolve::{Persist, Resolver};
/// use layered_settings::settings::Settings;
/// # use serde::{Deserialize, Serialize};
/// # #[derive(Debug, Clone, Default, Serialize, Deserialize)]
/// # struct AppSettings { port: u16 }
/// # impl Settings for AppSettings { const SECTION: &'static str = "AppSettings"; }
///
/// let registry: OptionRegistry = [("port", "--port", "-p")].into_iter().collect();
/// let resolver = Resolver::<AppSettings>::builder(SettingsDocument::json("settings.json"), registry)
///     .build()?;
///
/// let args: Vec<String> = std::env::args().skip(1).collect();
/// if let Some(settings) = resolver.resolve(&args, Persist::Yes).into_settings() {
///     println!("port = {}", settings.port);
/// }
/// # Ok::<(), layered_settings::settings::FieldError>(())
/// ```
#[derive(Debug)]
pub struct Resolver<S, F = JsonFormat> {
    document: SettingsDocument<F>,
    registry: OptionRegistry,
    detection: OverrideDetection,
    /// Caller-supplied defaults, if any.
    in_app_defaults: Option<S>,
    /// Fields of a fresh schema default.
    default_fields: FieldMap,
    /// Fields every resolution starts from: in-app defaults or schema defaults.
    baseline_fields: FieldMap,
}

/// Builder for [`Resolver`].
#[derive(Debug)]
pub struct ResolverBuilder<S, F = JsonFormat> {
    document: SettingsDocument<F>,
    registry: OptionRegistry,
    detection: OverrideDetection,
    in_app_defaults: Option<S>,
}

impl<S: Settings, F: DocumentFormat> ResolverBuilder<S, F> {
    /// Uses `defaults` instead of schema defaults as the baseline.
    ///
    /// `--reset` still restores schema defaults.
    #[must_use]
    pub fn in_app_defaults(mut self, defaults: S) -> Self {
        self.in_app_defaults = Some(defaults);
        self
    }

    /// Sets how command-line values are detected.
    #[must_use]
    pub const fn override_detection(mut self, detection: OverrideDetection) -> Self {
        self.detection = detection;
        self
    }

    /// Builds the resolver.
    ///
    /// # Errors
    ///
    /// Returns [`FieldError::NotFlat`] if the schema does not serialize to a
    /// flat object of fields.
    pub fn build(self) -> Result<Resolver<S, F>, FieldError> {
        let default_fields = to_fields(&S::defaults())?;
        let baseline_fields = match &self.in_app_defaults {
            Some(defaults) => to_fields(defaults)?,
            None => default_fields.clone(),
        };

        Ok(Resolver {
            document: self.document,
            registry: self.registry,
            detection: self.detection,
            in_app_defaults: self.in_app_defaults,
            default_fields,
            baseline_fields,
        })
    }
}

impl<S: Settings, F: DocumentFormat> Resolver<S, F> {
    /// Starts building a resolver for `document` with the given flag registry.
    #[must_use]
    pub fn builder(document: SettingsDocument<F>, registry: OptionRegistry) -> ResolverBuilder<S, F> {
        ResolverBuilder {
            document,
            registry,
            detection: OverrideDetection::default(),
            in_app_defaults: None,
        }
    }

    /// Returns the backing document.
    #[must_use]
    pub const fn document(&self) -> &SettingsDocument<F> {
        &self.document
    }

    /// Returns the flag registry.
    #[must_use]
    pub const fn registry(&self) -> &OptionRegistry {
        &self.registry
    }

    /// Returns the `--help` listing for this schema.
    #[must_use]
    pub fn help(&self) -> HelpCatalogue {
        HelpCatalogue::new(S::SECTION, &self.registry)
    }

    /// Resolves the settings for one argument vector.
    ///
    /// An empty vector reads the document section. A non-empty vector reads
    /// it only when at least one field assignment was recognized.
    pub fn resolve<T: AsRef<str>>(&self, args: &[T], persist: Persist) -> Outcome<S> {
        let mut command_line = None;
        let mut ignore_stored = false;
        let mut load_stored = args.is_empty();

        if !args.is_empty() {
            let parsed = tokenize(args, &self.registry);

            if parsed.help_requested {
                tracing::debug!("Help requested for [{}]", S::SECTION);
                return Outcome::Help(self.help());
            }
            if parsed.reset_requested {
                return Outcome::Resolved(self.reset(persist));
            }

            ignore_stored = parsed.ignore_stored_requested;
            load_stored = parsed.has_assignments();
            command_line = Some(self.apply_command_line(&parsed));
        }

        let (baseline, source) = if ignore_stored {
            tracing::info!("Ignoring stored settings for [{}]", S::SECTION);
            self.fallback()
        } else if load_stored {
            self.load_stored()
        } else {
            tracing::debug!("Command line given without assignments, document not read");
            self.fallback()
        };

        let fields = match &command_line {
            Some(command_line) => self.apply_overrides(baseline, command_line),
            None => baseline,
        };
        let (settings, fields) = self.finish(fields);

        let persist = if persist == Persist::No || ignore_stored {
            PersistStatus::Suppressed
        } else {
            self.persist(&fields)
        };

        Outcome::Resolved(Resolved {
            settings,
            source,
            persist,
        })
    }

    /// Restores schema defaults and persists them unless suppressed.
    fn reset(&self, persist: Persist) -> Resolved<S> {
        tracing::info!("Resetting [{}] to defaults", S::SECTION);

        let persist = match persist {
            Persist::Yes => self.persist(&self.default_fields),
            Persist::No => PersistStatus::Suppressed,
        };

        Resolved {
            settings: S::defaults(),
            source: Source::Reset,
            persist,
        }
    }

    /// Binds the parsed assignments onto a copy of the baseline.
    fn apply_command_line(&self, parsed: &ParsedArguments) -> CommandLine {
        let mut fields = self.baseline_fields.clone();
        let mut assigned = Vec::new();

        for assignment in &parsed.assignments {
            match bind::<S>(&mut fields, &assignment.field, &assignment.raw) {
                Ok(()) => {
                    if !assigned.contains(&assignment.field) {
                        assigned.push(assignment.field.clone());
                    }
                }
                Err(e) => tracing::warn!("Ignoring command-line value: {e}"),
            }
        }

        CommandLine { fields, assigned }
    }

    /// Copies command-line values onto `target` per the detection mode.
    fn apply_overrides(&self, mut target: FieldMap, command_line: &CommandLine) -> FieldMap {
        let overrides: Vec<&String> = match self.detection {
            OverrideDetection::DiffAgainstDefault => command_line
                .fields
                .iter()
                .filter(|&(name, value)| self.default_fields.get(name) != Some(value))
                .map(|(name, _)| name)
                .collect(),
            OverrideDetection::Explicit => command_line.assigned.iter().collect(),
        };

        for name in overrides {
            if let Some(value) = command_line.fields.get(name) {
                tracing::debug!("Command line sets {name} = {value}");
                target.insert(name.clone(), value.clone());
            }
        }
        target
    }

    /// Reads the document section on top of the baseline, or falls back.
    fn load_stored(&self) -> (FieldMap, Source) {
        let path = self.document.path().display();

        let stored = match self.document.load_section(S::SECTION) {
            LoadResult::Loaded(stored) => stored,
            LoadResult::NotFound => {
                tracing::info!("No settings document at {path}, using defaults");
                return self.fallback();
            }
            LoadResult::MissingSection => {
                tracing::info!("No [{}] section in {path}, using defaults", S::SECTION);
                return self.fallback();
            }
            LoadResult::Corrupted { reason } => {
                tracing::warn!("Unreadable settings document {path}, using defaults: {reason}");
                return self.fallback();
            }
        };

        let fields = overlay(self.baseline_fields.clone(), &stored);
        if let Err(e) = from_fields::<S>(fields.clone()) {
            tracing::warn!("Invalid [{}] section in {path}, using defaults: {e}", S::SECTION);
            return self.fallback();
        }

        tracing::info!("Loaded [{}] from {path}", S::SECTION);
        (fields, Source::Document)
    }

    /// Baseline used when the document is not consulted or unusable.
    fn fallback(&self) -> (FieldMap, Source) {
        let source = if self.in_app_defaults.is_some() {
            Source::InAppDefaults
        } else {
            Source::Defaults
        };
        (self.baseline_fields.clone(), source)
    }

    /// Converts the final fields, falling back to the baseline if they do not fit.
    fn finish(&self, fields: FieldMap) -> (S, FieldMap) {
        match from_fields::<S>(fields.clone()) {
            Ok(settings) => (settings, fields),
            Err(e) => {
                tracing::warn!("Resolved [{}] is invalid, using defaults: {e}", S::SECTION);
                let settings = self.in_app_defaults.clone().unwrap_or_else(S::defaults);
                (settings, self.baseline_fields.clone())
            }
        }
    }

    fn persist(&self, fields: &FieldMap) -> PersistStatus {
        match self.document.write_section(S::SECTION, fields) {
            Ok(()) => {
                tracing::info!(
                    "Saved [{}] to {}",
                    S::SECTION,
                    self.document.path().display()
                );
                PersistStatus::Written
            }
            Err(e) => {
                tracing::error!("Failed to save [{}]: {e}", S::SECTION);
                PersistStatus::Failed(e)
            }
        }
    }
}
