use pallet_rs::io::ext_repr::{ExtPLInstance, ExtPLSolution};
use serde::{Deserialize, Serialize};

use crate::config::FFDConfig;

#[derive(Serialize, Deserialize, Clone)]
pub struct PLOutput {
    #[serde(flatten)]
    pub instance: ExtPLInstance,
    pub solution: ExtPLSolution,
    pub config: FFDConfig,
}
