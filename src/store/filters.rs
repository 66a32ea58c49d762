// src/store/filters.rs
use super::namespace::NamespaceId;
use std::fmt;
use std::sync::Arc;

/// What a read asked for; handed to every transform.
#[derive(Debug, Clone, Copy)]
pub struct GetRequest<'a> {
    pub namespace: &'a NamespaceId,
    pub key: &'a str,
    pub plural: bool,
    pub lowercase: bool,
}

pub type Transform = Arc<dyn Fn(String, &GetRequest<'_>) -> String + Send + Sync>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TransformId(u64);

/// Read-path post-processing, applied in registration order.
#[derive(Clone, Default)]
pub struct TransformChain {
    transforms: Vec<(TransformId, Transform)>,
    next_id: u64,
}

impl TransformChain {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push<F>(&mut self, transform: F) -> TransformId
    where
        F: Fn(String, &GetRequest<'_>) -> String + Send + Sync + 'static,
    {
        let id = TransformId(self.next_id);
        self.next_id += 1;
        let transform: Transform = Arc::new(transform);
        self.transforms.push((id, transform));
        id
    }

    pub fn remove(&mut self, id: TransformId) -> bool {
        let before = self.transforms.len();
        self.transforms.retain(|(tid, _)| *tid != id);
        self.transforms.len() != before
    }

    pub fn clear(&mut self) {
        self.transforms.clear();
    }

    pub fn len(&self) -> usize {
        self.transforms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transforms.is_empty()
    }

    pub fn apply(&self, value: String, request: &GetRequest<'_>) -> String {
        self.transforms
            .iter()
            .fold(value, |acc, (_, transform)| transform(acc, request))
    }
}

impl fmt::Debug for TransformChain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TransformChain")
            .field("transforms", &self.transforms.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(ns: &NamespaceId) -> GetRequest<'_> {
        GetRequest {
            namespace: ns,
            key: "greeting",
            plural: false,
            lowercase: false,
        }
    }

    #[test]
    fn empty_chain_is_identity() {
        let ns = NamespaceId::derive("acme");
        let chain = TransformChain::new();
        assert_eq!(chain.apply("Hello".into(), &request(&ns)), "Hello");
    }

    #[test]
    fn transforms_run_in_registration_order() {
        let ns = NamespaceId::derive("acme");
        let mut chain = TransformChain::new();
        chain.push(|v, _| format!("{v}!"));
        chain.push(|v, _| format!("[{v}]"));
        assert_eq!(chain.apply("Hi".into(), &request(&ns)), "[Hi!]");
    }

    #[test]
    fn transforms_see_the_request() {
        let ns = NamespaceId::derive("acme");
        let mut chain = TransformChain::new();
        chain.push(|v, req| format!("{}:{}", req.key, v));
        assert_eq!(chain.apply("Hi".into(), &request(&ns)), "greeting:Hi");
    }

    #[test]
    fn remove_by_id() {
        let ns = NamespaceId::derive("acme");
        let mut chain = TransformChain::new();
        let first = chain.push(|v, _| v.to_uppercase());
        chain.push(|v, _| format!("{v}?"));

        assert!(chain.remove(first));
        assert!(!chain.remove(first));
        assert_eq!(chain.len(), 1);
        assert_eq!(chain.apply("hi".into(), &request(&ns)), "hi?");
    }
}
