use serde::{Deserialize, Serialize};
use varpack::io::ext_repr::{ExtVPInstance, ExtVPSolution};

use crate::config::BFSConfig;

#[derive(Serialize, Deserialize, Clone)]
#[serde(rename_all = "PascalCase")]
pub struct BFSOutput {
    #[serde(flatten)]
    pub instance: ExtVPInstance,
    pub solution: ExtVPSolution,
    pub config: BFSConfig,
}
