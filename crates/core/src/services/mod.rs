pub mod budget_service;
pub mod yearly_view_service;
