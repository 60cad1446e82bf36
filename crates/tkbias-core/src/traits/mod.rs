mod attribution_provider;
mod knowledge_store;
mod validator;

pub use attribution_provider::IAttributionProvider;
pub use knowledge_store::ITraditionalKnowledgeStore;
pub use validator::IBiasValidator;
