//! Boundary interface to a modeling/simulation environment.
//!
//! Molint itself never loads, checks, or simulates models; a downstream
//! driver hands validated trees to an environment (e.g. an OpenModelica
//! session) through this opaque remote-call seam. Nothing in the lint
//! pipeline depends on this module.

use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
/// Failure reported by the remote modeling session.
pub enum SessionError {
    #[error("session transport failed: {0}")]
    Transport(String),
    #[error("model '{0}' is not loaded")]
    NotLoaded(String),
    #[error("no value recorded for '{variable}' at t={time}")]
    NoValue { variable: String, time: f64 },
}

#[derive(Debug, Clone)]
/// Parameters for one simulation run.
pub struct SimulateSpec {
    pub qualified_name: String,
    pub start_time: f64,
    pub stop_time: f64,
    pub intervals: u32,
    pub tolerance: f64,
}

#[derive(Debug, Clone)]
/// Descriptor returned by a completed simulation.
pub struct SimResult {
    /// Path (or handle) of the result file produced by the environment.
    pub result_file: String,
    /// Free-form status messages from the engine.
    pub messages: String,
}

/// Remote operations a modeling environment must support.
pub trait ModelingSession {
    /// Load a model file or package; returns false when the environment
    /// rejects it without raising a transport failure.
    fn load(&mut self, path: &Path) -> Result<bool, SessionError>;

    /// Run the environment's own model check, returning its diagnostic text.
    fn check_model(&mut self, qualified_name: &str) -> Result<String, SessionError>;

    /// Simulate a loaded model over the given time window.
    fn simulate(&mut self, spec: &SimulateSpec) -> Result<SimResult, SessionError>;

    /// Read one variable's value at a given time from the last result.
    fn value_at(&mut self, variable: &str, time: f64) -> Result<f64, SessionError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::path::PathBuf;

    /// In-memory stand-in for a remote session, recording the call sequence.
    #[derive(Default)]
    struct FakeSession {
        loaded: Vec<PathBuf>,
        values: HashMap<String, f64>,
        simulated: Option<SimulateSpec>,
    }

    impl ModelingSession for FakeSession {
        fn load(&mut self, path: &Path) -> Result<bool, SessionError> {
            self.loaded.push(path.to_path_buf());
            Ok(true)
        }

        fn check_model(&mut self, qualified_name: &str) -> Result<String, SessionError> {
            if self.loaded.is_empty() {
                return Err(SessionError::NotLoaded(qualified_name.to_string()));
            }
            Ok(format!("Check of {qualified_name} completed successfully."))
        }

        fn simulate(&mut self, spec: &SimulateSpec) -> Result<SimResult, SessionError> {
            self.simulated = Some(spec.clone());
            Ok(SimResult {
                result_file: format!("{}_res.mat", spec.qualified_name),
                messages: String::new(),
            })
        }

        fn value_at(&mut self, variable: &str, time: f64) -> Result<f64, SessionError> {
            self.values
                .get(variable)
                .copied()
                .ok_or_else(|| SessionError::NoValue {
                    variable: variable.to_string(),
                    time,
                })
        }
    }

    #[test]
    fn test_session_flow_load_check_simulate() {
        let mut s = FakeSession::default();
        assert!(s.load(Path::new("CryoSystem/package.mo")).unwrap());
        let diag = s.check_model("CryoSystem.LiquidHydrogenSystem").unwrap();
        assert!(diag.contains("completed successfully"));

        let spec = SimulateSpec {
            qualified_name: "CryoSystem.LiquidHydrogenSystem".into(),
            start_time: 0.0,
            stop_time: 2000.0,
            intervals: 2000,
            tolerance: 1e-6,
        };
        let res = s.simulate(&spec).unwrap();
        assert!(res.result_file.ends_with("_res.mat"));
    }

    #[test]
    fn test_check_before_load_is_an_error() {
        let mut s = FakeSession::default();
        let err = s.check_model("CryoSystem.LiquidHydrogenSystem").unwrap_err();
        assert!(matches!(err, SessionError::NotLoaded(_)));
    }

    #[test]
    fn test_missing_value_reports_variable_and_time() {
        let mut s = FakeSession::default();
        let err = s.value_at("T_coldBox", 2000.0).unwrap_err();
        assert_eq!(
            err.to_string(),
            "no value recorded for 'T_coldBox' at t=2000"
        );
    }
}
