//! Compiled contract artifacts (Hardhat `artifacts/` layout, Foundry `out/` accepted)

use std::{
    fs,
    path::{Path, PathBuf},
};

use alloy::{
    dyn_abi::{DynSolValue, JsonAbiExt, Specifier},
    json_abi::JsonAbi,
    primitives::Bytes,
};
use serde::Deserialize;

#[derive(Debug, thiserror::Error)]
pub enum ArtifactError {
    #[error("failed to read artifact {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("malformed artifact: {0}")]
    Json(#[from] serde_json::Error),
    #[error("{0} has no bytecode (abstract contract or interface?)")]
    NoBytecode(String),
    #[error("{name} has no constructor but {given} argument(s) were given")]
    NoConstructor { name: String, given: usize },
    #[error("{name} constructor takes {expected} argument(s), {given} given")]
    Arity {
        name: String,
        expected: usize,
        given: usize,
    },
    #[error("invalid constructor argument for {name}: {source}")]
    Encode {
        name: String,
        source: alloy::dyn_abi::Error,
    },
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum BytecodeField {
    Hex(Bytes),
    Object { object: Bytes },
}

impl BytecodeField {
    fn into_bytes(self) -> Bytes {
        match self {
            Self::Hex(b) | Self::Object { object: b } => b,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawArtifact {
    #[serde(default)]
    contract_name: Option<String>,
    abi: JsonAbi,
    bytecode: BytecodeField,
}

/// A compiled contract: its ABI and creation bytecode.
#[derive(Debug, Clone)]
pub struct Artifact {
    pub name: String,
    pub abi: JsonAbi,
    pub bytecode: Bytes,
}

impl Artifact {
    pub fn from_json(json: &str) -> Result<Self, ArtifactError> {
        let raw: RawArtifact = serde_json::from_str(json)?;
        Ok(Self {
            name: raw.contract_name.unwrap_or_default(),
            abi: raw.abi,
            bytecode: raw.bytecode.into_bytes(),
        })
    }

    /// Read an artifact file. The contract name falls back to the file stem.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ArtifactError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|source| ArtifactError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let mut artifact = Self::from_json(&json)?;
        if artifact.name.is_empty() {
            if let Some(stem) = path.file_stem() {
                artifact.name = stem.to_string_lossy().into_owned();
            }
        }
        Ok(artifact)
    }

    /// Number of constructor parameters, zero for contracts without a constructor.
    pub fn constructor_arity(&self) -> usize {
        self.abi.constructor().map_or(0, |c| c.inputs.len())
    }

    /// ABI-encode constructor arguments, checking them against the constructor signature.
    pub fn encode_constructor(&self, args: &[DynSolValue]) -> Result<Vec<u8>, ArtifactError> {
        let Some(constructor) = self.abi.constructor() else {
            if args.is_empty() {
                return Ok(Vec::new());
            }
            return Err(ArtifactError::NoConstructor {
                name: self.name.clone(),
                given: args.len(),
            });
        };
        if constructor.inputs.len() != args.len() {
            return Err(ArtifactError::Arity {
                name: self.name.clone(),
                expected: constructor.inputs.len(),
                given: args.len(),
            });
        }
        constructor
            .abi_encode_input(args)
            .map_err(|source| self.encode_error(source))
    }

    /// Coerce textual arguments (as typed on a command line) to the constructor's parameter types.
    pub fn encode_constructor_strs<S: AsRef<str>>(
        &self,
        args: &[S],
    ) -> Result<Vec<u8>, ArtifactError> {
        let inputs = self
            .abi
            .constructor()
            .map(|c| c.inputs.as_slice())
            .unwrap_or_default();
        if inputs.is_empty() && !args.is_empty() {
            return Err(ArtifactError::NoConstructor {
                name: self.name.clone(),
                given: args.len(),
            });
        }
        if inputs.len() != args.len() {
            return Err(ArtifactError::Arity {
                name: self.name.clone(),
                expected: inputs.len(),
                given: args.len(),
            });
        }
        let values = inputs
            .iter()
            .zip(args)
            .map(|(param, arg)| param.resolve()?.coerce_str(arg.as_ref()))
            .collect::<Result<Vec<_>, _>>()
            .map_err(|source| self.encode_error(source))?;
        self.encode_constructor(&values)
    }

    /// Creation transaction input: bytecode followed by the encoded constructor arguments.
    pub fn deploy_code(&self, encoded_args: &[u8]) -> Result<Bytes, ArtifactError> {
        if self.bytecode.is_empty() {
            return Err(ArtifactError::NoBytecode(self.name.clone()));
        }
        let mut code = Vec::with_capacity(self.bytecode.len() + encoded_args.len());
        code.extend_from_slice(&self.bytecode);
        code.extend_from_slice(encoded_args);
        Ok(code.into())
    }

    fn encode_error(&self, source: alloy::dyn_abi::Error) -> ArtifactError {
        ArtifactError::Encode {
            name: self.name.clone(),
            source,
        }
    }
}

/// Directory of compiled artifacts laid out as `<root>/<Name>.sol/<Name>.json`.
#[derive(Debug, Clone)]
pub struct ArtifactStore {
    root: PathBuf,
}

impl ArtifactStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn path_for(&self, name: &str) -> PathBuf {
        self.root.join(format!("{name}.sol")).join(format!("{name}.json"))
    }

    /// Load by contract name, or by path when `name` points at an existing JSON file.
    pub fn load(&self, name: &str) -> Result<Artifact, ArtifactError> {
        let direct = Path::new(name);
        if direct.extension().is_some_and(|ext| ext == "json") && direct.is_file() {
            return Artifact::load(direct);
        }
        Artifact::load(self.path_for(name))
    }
}

#[cfg(test)]
mod tests {
    use alloy::{
        primitives::{Address, U256},
        sol_types::SolValue,
    };

    use super::*;
    use crate::fixtures;

    #[test]
    fn parses_hardhat_artifact() {
        let artifact = fixtures::token_artifact();
        assert_eq!(artifact.name, "Token");
        assert_eq!(artifact.constructor_arity(), 3);
        assert_eq!(artifact.bytecode, fixtures::CONSTANT_INIT);
    }

    #[test]
    fn parses_foundry_artifact() {
        let json = r#"{"abi":[],"bytecode":{"object":"0x6001600c60003960016000f300","linkReferences":{}}}"#;
        let artifact = Artifact::from_json(json).unwrap();
        assert_eq!(artifact.bytecode, fixtures::STOP_INIT);
        assert_eq!(artifact.constructor_arity(), 0);
    }

    #[test]
    fn interface_has_no_deploy_code() {
        let artifact = Artifact::from_json(r#"{"contractName":"IERC20","abi":[],"bytecode":"0x"}"#)
            .unwrap();
        assert!(matches!(
            artifact.deploy_code(&[]),
            Err(ArtifactError::NoBytecode(name)) if name == "IERC20"
        ));
    }

    #[test]
    fn constructor_args_match_static_encoding() {
        let artifact = fixtures::token_artifact();
        let encoded = artifact
            .encode_constructor(&[
                DynSolValue::String("Gold".into()),
                DynSolValue::String("GLD".into()),
                DynSolValue::Uint(U256::from(1000), 256),
            ])
            .unwrap();
        let expected =
            ("Gold".to_string(), "GLD".to_string(), U256::from(1000)).abi_encode_params();
        assert_eq!(encoded, expected);

        let code = artifact.deploy_code(&encoded).unwrap();
        assert!(code.starts_with(&fixtures::CONSTANT_INIT));
        assert_eq!(code.len(), fixtures::CONSTANT_INIT.len() + expected.len());
    }

    #[test]
    fn constructor_strs_are_coerced() {
        let artifact = fixtures::pair_constructor_artifact("Pool");
        let a = "0x5FbDB2315678afecb367f032d93F642f64180aa3";
        let b = "0xe7f1725E7734CE288F8367e1Bb143E90bb3F0512";
        let encoded = artifact.encode_constructor_strs(&[a, b]).unwrap();
        let expected =
            (a.parse::<Address>().unwrap(), b.parse::<Address>().unwrap()).abi_encode_params();
        assert_eq!(encoded, expected);
    }

    #[test]
    fn constructor_mismatches_are_rejected() {
        let token = fixtures::token_artifact();
        assert!(matches!(
            token.encode_constructor_strs(&["Gold"]),
            Err(ArtifactError::Arity { expected: 3, given: 1, .. })
        ));
        assert!(matches!(
            token.encode_constructor_strs(&["Gold", "GLD", "not-a-number"]),
            Err(ArtifactError::Encode { .. })
        ));

        let stop = fixtures::stop_artifact();
        assert!(stop.encode_constructor(&[]).unwrap().is_empty());
        assert!(matches!(
            stop.encode_constructor(&[DynSolValue::Bool(true)]),
            Err(ArtifactError::NoConstructor { given: 1, .. })
        ));
    }

    #[test]
    fn store_resolves_hardhat_layout() {
        let dir = tempfile::tempdir().unwrap();
        let store = ArtifactStore::new(dir.path());
        let path = store.path_for("Stop");
        assert_eq!(path, dir.path().join("Stop.sol").join("Stop.json"));

        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, r#"{"abi":[],"bytecode":"0x6001600c60003960016000f300"}"#).unwrap();
        let artifact = store.load("Stop").unwrap();
        assert_eq!(artifact.name, "Stop");

        let direct = store.load(path.to_str().unwrap()).unwrap();
        assert_eq!(direct.bytecode, fixtures::STOP_INIT);

        assert!(matches!(store.load("Missing"), Err(ArtifactError::Read { .. })));
    }
}
