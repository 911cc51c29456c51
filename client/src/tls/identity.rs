//! Client certificate material.

use std::fs;
use std::path::{Path, PathBuf};

use native_tls::{Certificate, Identity};

use crate::error::{PassHolderError, Result};

/// Certificate material for the mutually-authenticated connection.
///
/// The provider certificate is a PKCS#12 bundle holding the client
/// certificate and key. A root certificate authority may be attached; peer
/// verification is enforced exactly when one is present. Both files are
/// validated readable at construction and never reloaded afterwards.
#[derive(Debug, Clone)]
pub struct TlsIdentity {
    provider_certificate: PathBuf,
    password: String,
    root_certificate_authority: Option<PathBuf>,
}

impl TlsIdentity {
    /// Creates an identity from a PKCS#12 provider certificate file.
    ///
    /// # Errors
    ///
    /// Returns [`PassHolderError::Configuration`] when the file cannot be
    /// read.
    pub fn new(
        provider_certificate: impl AsRef<Path>,
        password: impl Into<String>,
    ) -> Result<Self> {
        let path = provider_certificate.as_ref();
        read_file(path)
            .map_err(|_| configuration_error("certificate", path))?;

        Ok(TlsIdentity {
            provider_certificate: path.to_path_buf(),
            password: password.into(),
            root_certificate_authority: None,
        })
    }

    /// Attaches a root certificate authority bundle (PEM), enabling peer
    /// verification against it.
    ///
    /// # Errors
    ///
    /// Returns [`PassHolderError::Configuration`] when the file cannot be
    /// read.
    pub fn with_root_certificate_authority(
        mut self,
        root_certificate_authority: impl AsRef<Path>,
    ) -> Result<Self> {
        let path = root_certificate_authority.as_ref();
        read_file(path)
            .map_err(|_| configuration_error("Certificate Authority", path))?;

        self.root_certificate_authority = Some(path.to_path_buf());
        Ok(self)
    }

    /// Whether peer verification is enabled.
    pub fn verifies_peer(&self) -> bool {
        self.root_certificate_authority.is_some()
    }

    /// Parses the provider certificate into a `native-tls` identity.
    pub(crate) fn load_identity(&self) -> Result<Identity> {
        let data = read_file(&self.provider_certificate)
            .map_err(|_| configuration_error("certificate", &self.provider_certificate))?;

        Identity::from_pkcs12(&data, &self.password).map_err(|e| {
            PassHolderError::Configuration(format!(
                "Invalid PKCS#12 certificate '{}': {}",
                self.provider_certificate.display(),
                e
            ))
        })
    }

    /// Parses the CA bundle, if one was attached.
    pub(crate) fn load_root_certificate(&self) -> Result<Option<Certificate>> {
        let path = match &self.root_certificate_authority {
            Some(path) => path,
            None => return Ok(None),
        };

        let data =
            read_file(path).map_err(|_| configuration_error("Certificate Authority", path))?;

        let certificate = Certificate::from_pem(&data).map_err(|e| {
            PassHolderError::Configuration(format!(
                "Invalid Certificate Authority file '{}': {}",
                path.display(),
                e
            ))
        })?;
        Ok(Some(certificate))
    }
}

fn read_file(path: &Path) -> std::io::Result<Vec<u8>> {
    let data = fs::read(path)?;
    if data.is_empty() {
        return Err(std::io::Error::new(
            std::io::ErrorKind::InvalidData,
            "file is empty",
        ));
    }
    Ok(data)
}

fn configuration_error(kind: &str, path: &Path) -> PassHolderError {
    PassHolderError::Configuration(format!(
        "Unable to read {} file '{}'",
        kind,
        path.display()
    ))
}
