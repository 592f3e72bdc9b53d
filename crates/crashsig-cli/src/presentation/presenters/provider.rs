use crashsig_types::{BugProvider, URL_PLACEHOLDER};

use crate::presentation::view_models::{ProviderEntryViewModel, ProviderListViewModel};

pub fn present_provider(provider: &BugProvider) -> ProviderEntryViewModel {
    ProviderEntryViewModel {
        id: provider.id,
        classname: provider.classname.clone(),
        hostname: provider.hostname.clone(),
        url_template: provider.url_template.clone(),
        template_ok: provider.url_template.contains(URL_PLACEHOLDER),
    }
}

pub fn present_provider_list(providers: &[BugProvider]) -> ProviderListViewModel {
    ProviderListViewModel {
        providers: providers.iter().map(present_provider).collect(),
    }
}
