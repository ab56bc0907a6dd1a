mod providers;
mod repositories;

pub use providers::{
    OAuthProvider, OAuthToken, ProviderError, ProviderResult, ServerStatus, ServerStatusProvider,
};
pub use repositories::{
    RepoResult, ServerRepository, TagRepository, UserRepository, VersionRepository, VoteRepository,
};
