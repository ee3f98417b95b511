use crate::core::intent::PortMapping;
use k8s_openapi::api::apps::v1::{Deployment, DeploymentSpec};
use k8s_openapi::api::core::v1::{
    Container, ContainerPort, PodSpec, PodTemplateSpec, Service, ServicePort, ServiceSpec,
};
use k8s_openapi::apimachinery::pkg::apis::meta::v1::{LabelSelector, ObjectMeta};
use k8s_openapi::apimachinery::pkg::util::intstr::IntOrString;
use std::collections::BTreeMap;

fn app_labels(name: &str) -> BTreeMap<String, String> {
    let mut labels = BTreeMap::new();
    labels.insert("app".to_string(), name.to_string());
    labels
}

/// Builds the apps/v1 Deployment: one container running `image`, one
/// container port per target port. The resource is named `<name>-deployment`.
pub fn build_deployment(image: &str, name: &str, target_ports: &[i32], replicas: i32) -> Deployment {
    let container_ports: Vec<ContainerPort> = target_ports
        .iter()
        .map(|&p| ContainerPort {
            container_port: p,
            ..Default::default()
        })
        .collect();

    let container = Container {
        name: name.to_string(),
        image: Some(image.to_string()),
        ports: Some(container_ports),
        ..Default::default()
    };

    let labels = app_labels(name);

    Deployment {
        metadata: ObjectMeta {
            name: Some(format!("{}-deployment", name)),
            ..Default::default()
        },
        spec: Some(DeploymentSpec {
            replicas: Some(replicas),
            selector: LabelSelector {
                match_labels: Some(labels.clone()),
                ..Default::default()
            },
            template: PodTemplateSpec {
                metadata: Some(ObjectMeta {
                    labels: Some(labels),
                    ..Default::default()
                }),
                spec: Some(PodSpec {
                    containers: vec![container],
                    ..Default::default()
                }),
            },
            ..Default::default()
        }),
        ..Default::default()
    }
}

/// Builds the LoadBalancer Service from the valid mapping list. Callers
/// filter invalid mappings beforehand; protocol and target_port defaulting is
/// applied here, independently per mapping.
pub fn build_service(name: &str, ports: &[PortMapping]) -> Service {
    let service_ports: Vec<ServicePort> = ports
        .iter()
        .filter_map(|p| {
            let port = p.port.filter(|v| *v > 0)?;
            let target_port = p.effective_target_port()?;
            Some(ServicePort {
                protocol: Some(p.protocol_or_default()),
                port,
                target_port: Some(IntOrString::Int(target_port)),
                ..Default::default()
            })
        })
        .collect();

    Service {
        metadata: ObjectMeta {
            name: Some(name.to_string()),
            ..Default::default()
        },
        spec: Some(ServiceSpec {
            selector: Some(app_labels(name)),
            type_: Some("LoadBalancer".to_string()),
            ports: Some(service_ports),
            ..Default::default()
        }),
        ..Default::default()
    }
}
