//! Pre-parsed resource records handed to the table printer.
//!
//! Records arrive from a serialized document (a Kubernetes `List`-shaped JSON
//! file with an `items` array); this module only defines the typed model, it
//! does not read files.

use std::{collections::BTreeMap, fmt};

use serde::{Deserialize, Serialize};

/// A `List`-shaped envelope, as emitted by `kubectl get ... -o json`.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct RecordList<T> {
    #[serde(default = "Vec::new")]
    pub items: Vec<T>,
}

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceRecord {
    pub name: String,

    pub namespace: String,

    #[serde(rename = "type")]
    pub service_type: ServiceType,

    /// May be empty or the literal `"None"` for headless services.
    #[serde(default, rename = "clusterIP")]
    pub cluster_ip: String,

    #[serde(default)]
    pub ports: Vec<ServicePort>,
}

#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct ServicePort {
    pub port: u16,

    #[serde(default)]
    pub protocol: Protocol,
}

impl fmt::Display for ServicePort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.port, self.protocol)
    }
}

#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Protocol {
    #[default]
    Tcp,
    Udp,
    Sctp,
}

impl fmt::Display for Protocol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let val = match self {
            Self::Tcp => "TCP",
            Self::Udp => "UDP",
            Self::Sctp => "SCTP",
        };
        f.write_str(val)
    }
}

#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub enum ServiceType {
    #[default]
    ClusterIP,
    NodePort,
    LoadBalancer,
    ExternalName,
}

impl fmt::Display for ServiceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let val = match self {
            Self::ClusterIP => "ClusterIP",
            Self::NodePort => "NodePort",
            Self::LoadBalancer => "LoadBalancer",
            Self::ExternalName => "ExternalName",
        };
        f.write_str(val)
    }
}

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PodRecord {
    pub name: String,

    pub namespace: String,

    #[serde(default)]
    pub labels: BTreeMap<String, String>,

    /// Ready-container summary, e.g. `"1/1"`.
    #[serde(default)]
    pub ready: String,

    #[serde(default)]
    pub status: String,

    #[serde(default)]
    pub retries: u32,

    /// Already-formatted age, e.g. `"5d"`.
    #[serde(default)]
    pub age: String,
}
