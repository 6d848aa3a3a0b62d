use crate::catalog::domain::SharedCatalog;
use crate::checkout::domain::CheckoutService;
use crate::checkout::domain::service::CheckoutServiceImpl;
use crate::core::domain::Configuration;

pub(crate) fn create_checkout_service(config: &Configuration, catalog: SharedCatalog) -> Box<dyn CheckoutService> {
    Box::new(CheckoutServiceImpl::new(config, catalog))
}
