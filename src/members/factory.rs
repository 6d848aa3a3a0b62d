use crate::catalog::domain::SharedCatalog;
use crate::core::domain::Configuration;
use crate::members::domain::MemberService;
use crate::members::domain::service::MemberServiceImpl;

pub(crate) fn create_member_service(config: &Configuration, catalog: SharedCatalog) -> Box<dyn MemberService> {
    Box::new(MemberServiceImpl::new(config, catalog))
}
