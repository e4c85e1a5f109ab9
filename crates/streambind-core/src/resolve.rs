//! One generation run: functions, configuration and model classes.

use crate::binding::StreamConfig;
use crate::cache::{ModelCache, ModelClass};
use crate::config::GenerationParams;
use crate::document::Document;
use crate::error::ResolveResult;
use crate::function::{FunctionSpec, build_function_specs};
use indexmap::IndexMap;
use serde::Serialize;

/// Everything the rendering stage consumes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Resolution {
    pub functions: IndexMap<String, FunctionSpec>,
    pub config: StreamConfig,
    pub models: Vec<ModelClass>,
}

/// Resolve a document under the given parameters.
///
/// The cache is reset before use and left populated afterwards; callers that
/// keep it across runs may also [`ModelCache::reset`] it once done.
pub fn resolve(
    document: &Document,
    params: &GenerationParams,
    cache: &mut ModelCache,
) -> ResolveResult<Resolution> {
    let functions = build_function_specs(document, params, cache)?;
    let config = StreamConfig::from_specs(&functions, params);
    let models = cache.model_classes(document)?.values().cloned().collect();

    Ok(Resolution {
        functions,
        config,
        models,
    })
}
