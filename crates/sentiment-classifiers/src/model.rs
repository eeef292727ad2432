//! Inference engine: pretrained sequence models behind a common trait

use candle_core::{DType, Device, Tensor};
use candle_nn::{Embedding, Linear, Module};
use sentiment_core::{ArtifactKind, Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

/// A pretrained model mapping a fixed-length index sequence to P(Positive)
pub trait SequenceModel: Send + Sync {
    /// Run a forward pass and return a probability in [0, 1]
    fn predict_proba(&self, sequence: &[u32]) -> Result<f32>;

    /// Get the model name
    fn name(&self) -> &str;
}

/// Device type for inference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeviceType {
    /// CPU inference (always available)
    #[default]
    Cpu,
    /// CUDA GPU 0
    Cuda,
    /// Metal (Apple Silicon)
    Metal,
}

impl DeviceType {
    /// Create the Candle device
    pub fn create(&self) -> Result<Device> {
        match self {
            Self::Cpu => Ok(Device::Cpu),
            Self::Cuda => Device::new_cuda(0).map_err(|e| {
                Error::artifact_load(
                    ArtifactKind::Model,
                    format!("Failed to create CUDA device: {}", e),
                )
            }),
            Self::Metal => Device::new_metal(0).map_err(|e| {
                Error::artifact_load(
                    ArtifactKind::Model,
                    format!("Failed to create Metal device: {}", e),
                )
            }),
        }
    }
}

/// Embedding → mean pooling → dense stack → sigmoid.
///
/// Weights come from a safetensors file with an `embedding.weight` matrix and
/// contiguous `dense_{i}.weight` / `dense_{i}.bias` layers ending in one unit.
pub struct PooledDenseModel {
    name: String,
    embedding: Embedding,
    layers: Vec<Linear>,
    vocab_size: usize,
    device: Device,
}

impl std::fmt::Debug for PooledDenseModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PooledDenseModel")
            .field("name", &self.name)
            .field("vocab_size", &self.vocab_size)
            .field("layers", &self.layers.len())
            .finish()
    }
}

fn load_error(msg: impl Into<String>) -> Error {
    Error::artifact_load(ArtifactKind::Model, msg)
}

fn take_tensor(tensors: &mut HashMap<String, Tensor>, key: &str) -> Result<Option<Tensor>> {
    tensors
        .remove(key)
        .map(|t| {
            t.to_dtype(DType::F32)
                .map_err(|e| load_error(format!("Failed to convert {} to f32: {}", key, e)))
        })
        .transpose()
}

impl PooledDenseModel {
    /// Load weights from a safetensors file
    pub fn load(path: impl AsRef<Path>, device: DeviceType) -> Result<Self> {
        let path = path.as_ref();
        let device = device.create()?;

        let tensors = candle_core::safetensors::load(path, &device)
            .map_err(|e| load_error(format!("Failed to load safetensors: {}", e)))?;

        let name = path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("model")
            .to_string();

        Self::from_tensors(name, tensors, device)
    }

    /// Assemble the model from named tensors, validating the layer chain
    pub fn from_tensors(
        name: impl Into<String>,
        mut tensors: HashMap<String, Tensor>,
        device: Device,
    ) -> Result<Self> {
        let embedding_weight = take_tensor(&mut tensors, "embedding.weight")?
            .ok_or_else(|| load_error("missing tensor 'embedding.weight'"))?;
        let (vocab_size, dim) = embedding_weight
            .dims2()
            .map_err(|e| load_error(format!("embedding.weight must be a matrix: {}", e)))?;

        let mut layers = Vec::new();
        let mut in_features = dim;
        for idx in 0.. {
            let Some(weight) = take_tensor(&mut tensors, &format!("dense_{}.weight", idx))? else {
                break;
            };
            let bias = take_tensor(&mut tensors, &format!("dense_{}.bias", idx))?
                .ok_or_else(|| load_error(format!("missing tensor 'dense_{}.bias'", idx)))?;

            let (out_features, layer_in) = weight
                .dims2()
                .map_err(|e| load_error(format!("dense_{}.weight must be a matrix: {}", idx, e)))?;
            if layer_in != in_features {
                return Err(load_error(format!(
                    "dense_{} expects {} inputs but receives {}",
                    idx, layer_in, in_features
                )));
            }
            let bias_len = bias
                .dims1()
                .map_err(|e| load_error(format!("dense_{}.bias must be a vector: {}", idx, e)))?;
            if bias_len != out_features {
                return Err(load_error(format!(
                    "dense_{}.bias has {} values, expected {}",
                    idx, bias_len, out_features
                )));
            }

            layers.push(Linear::new(weight, Some(bias)));
            in_features = out_features;
        }

        if layers.is_empty() {
            return Err(load_error("no dense layers found (expected 'dense_0.weight')"));
        }

        // dense layers must be numbered from 0 without gaps
        let mut stray: Vec<&String> = tensors.keys().filter(|k| k.starts_with("dense_")).collect();
        if !stray.is_empty() {
            stray.sort();
            return Err(load_error(format!(
                "dense layers after dense_{} are not contiguous: {:?}",
                layers.len() - 1,
                stray
            )));
        }

        if in_features != 1 {
            return Err(load_error(format!(
                "final dense layer must have a single output unit, found {}",
                in_features
            )));
        }

        tracing::debug!(
            "Assembled model (vocab_size={}, embedding_dim={}, dense_layers={})",
            vocab_size,
            dim,
            layers.len()
        );

        Ok(Self {
            name: name.into(),
            embedding: Embedding::new(embedding_weight, dim),
            layers,
            vocab_size,
            device,
        })
    }

    /// Number of rows in the embedding table
    pub fn vocab_size(&self) -> usize {
        self.vocab_size
    }

    fn forward(&self, sequence: &[u32]) -> candle_core::Result<Tensor> {
        let input_ids = Tensor::new(sequence, &self.device)?.unsqueeze(0)?;
        let mut hidden = self.embedding.forward(&input_ids)?.mean(1)?;

        let last = self.layers.len() - 1;
        for (idx, layer) in self.layers.iter().enumerate() {
            hidden = layer.forward(&hidden)?;
            if idx < last {
                hidden = hidden.relu()?;
            }
        }

        // sigmoid
        hidden.neg()?.exp()?.affine(1.0, 1.0)?.recip()
    }
}

impl SequenceModel for PooledDenseModel {
    fn predict_proba(&self, sequence: &[u32]) -> Result<f32> {
        if sequence.is_empty() {
            return Err(Error::prediction("input sequence is empty"));
        }
        if let Some(&bad) = sequence.iter().find(|&&id| id as usize >= self.vocab_size) {
            return Err(Error::prediction(format!(
                "token index {} is outside the embedding table of size {}",
                bad, self.vocab_size
            )));
        }

        let output = self
            .forward(sequence)
            .map_err(|e| Error::prediction(format!("Model forward pass failed: {}", e)))?;

        let values = output
            .flatten_all()
            .and_then(|t| t.to_vec1::<f32>())
            .map_err(|e| Error::prediction(format!("Failed to read model output: {}", e)))?;

        match values.as_slice() {
            [p] if p.is_finite() => Ok(*p),
            [p] => Err(Error::prediction(format!("model produced a non-finite output ({})", p))),
            other => Err(Error::prediction(format!(
                "expected a single output value, got {}",
                other.len()
            ))),
        }
    }

    fn name(&self) -> &str {
        &self.name
    }
}
