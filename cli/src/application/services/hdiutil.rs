//! The `Hdiutil` client: one async method per supported verb.
//!
//! Each method builds a [`Verb`], hands it to the configured
//! [`ProcessExecutor`] and, for `attach` and `create`, parses the success
//! text into a typed result.

use std::path::Path;

use crate::application::ports::ProcessExecutor;
use crate::domain::options::{
    AttachOption, ConvertOption, CreateOption, ImageFormat, InfoOption, ResizeOption,
    UdifrezOption,
};
use crate::domain::{
    AttachOutput, CreateOutput, HdiutilError, UnsupportedVerb, Verb, create_target,
    create_working_dir,
};

/// Execution context for `hdiutil` calls.
///
/// Holds no mutable state; concurrent calls each spawn their own process.
pub struct Hdiutil<E> {
    executor: E,
}

impl<E: ProcessExecutor> Hdiutil<E> {
    pub const fn new(executor: E) -> Self {
        Self { executor }
    }

    pub const fn executor(&self) -> &E {
        &self.executor
    }

    /// Execute an already built verb and return its raw success text.
    ///
    /// # Errors
    ///
    /// Propagates the executor's error unchanged.
    pub async fn run(&self, verb: &Verb, working_dir: Option<&Path>) -> Result<String, HdiutilError> {
        self.executor.execute(verb, working_dir).await
    }

    /// Minimal usage information for each verb.
    ///
    /// # Errors
    ///
    /// See [`Hdiutil::run`].
    pub async fn help(&self) -> Result<String, HdiutilError> {
        self.run(&Verb::Help, None).await
    }

    /// Attach `image` as a device.
    ///
    /// # Errors
    ///
    /// Returns `InvalidOutput` if the binary's reply lacks a device node or
    /// mount point, otherwise see [`Hdiutil::run`].
    pub async fn attach(
        &self,
        image: &Path,
        options: Vec<AttachOption>,
    ) -> Result<AttachOutput, HdiutilError> {
        let verb = Verb::Attach {
            image: image.to_path_buf(),
            options,
        };
        let raw = self.run(&verb, None).await?;
        AttachOutput::parse(&raw)
    }

    /// Detach the device `device` (e.g. `"disk2"` or a mount point).
    ///
    /// # Errors
    ///
    /// See [`Hdiutil::run`].
    pub async fn detach(&self, device: &str, force: bool) -> Result<String, HdiutilError> {
        let verb = Verb::Detach {
            device: device.to_string(),
            force,
        };
        self.run(&verb, None).await
    }

    /// Create a new image, optionally inside `destination`.
    ///
    /// An absolute `destination` is also the working directory in bridged mode.
    ///
    /// # Errors
    ///
    /// Returns `InvalidOutput` if the reply does not name the created image,
    /// otherwise see [`Hdiutil::run`].
    pub async fn create(
        &self,
        image: &Path,
        destination: Option<&Path>,
        options: Vec<CreateOption>,
    ) -> Result<CreateOutput, HdiutilError> {
        let verb = Verb::Create {
            image: create_target(image, destination),
            options,
        };
        let raw = self.run(&verb, create_working_dir(destination)).await?;
        CreateOutput::parse(&raw)
    }

    /// Convert `image` to `format`, writing the result to `output`.
    ///
    /// # Errors
    ///
    /// See [`Hdiutil::run`].
    pub async fn convert(
        &self,
        image: &Path,
        format: ImageFormat,
        output: &Path,
        options: Vec<ConvertOption>,
    ) -> Result<String, HdiutilError> {
        let verb = Verb::Convert {
            image: image.to_path_buf(),
            format,
            output: output.to_path_buf(),
            options,
        };
        self.run(&verb, None).await
    }

    /// Information about attached images.
    ///
    /// # Errors
    ///
    /// See [`Hdiutil::run`].
    pub async fn info(&self, options: Vec<InfoOption>) -> Result<String, HdiutilError> {
        self.run(&Verb::Info { options }, None).await
    }

    /// Resize a partition or image.
    ///
    /// # Errors
    ///
    /// See [`Hdiutil::run`].
    pub async fn resize(
        &self,
        image: &Path,
        options: Vec<ResizeOption>,
    ) -> Result<String, HdiutilError> {
        let verb = Verb::Resize {
            image: image.to_path_buf(),
            options,
        };
        self.run(&verb, None).await
    }

    /// Embed resources (e.g. a license agreement) in a UDIF image.
    ///
    /// # Errors
    ///
    /// See [`Hdiutil::run`].
    pub async fn udifrez(
        &self,
        image: &Path,
        options: Vec<UdifrezOption>,
    ) -> Result<String, HdiutilError> {
        let verb = Verb::Udifrez {
            image: image.to_path_buf(),
            options,
        };
        self.run(&verb, None).await
    }

    /// Verbs this layer never executes. Always fails; nothing is spawned.
    ///
    /// # Errors
    ///
    /// Always returns `Unimplemented(verb)`.
    #[allow(clippy::unused_self)]
    pub fn unsupported(&self, verb: UnsupportedVerb) -> Result<String, HdiutilError> {
        Err(HdiutilError::Unimplemented(verb))
    }
}
