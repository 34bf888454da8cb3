use super::api::OrderApi;
use super::error::OrderError;
use contracts::domain::a001_order::aggregate::{Order, OrderStatus};

/// Lifecycle of the details panel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditorPhase {
    #[default]
    NoSelection,
    Viewing,
    Editing,
    Saving,
}

/// Holds the selected order and its editable draft.
///
/// Only customer, address and status fields are editable here; cart items
/// are carried over untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OrderEditor {
    selected: Option<Order>,
    draft: Option<Order>,
    phase: EditorPhase,
}

impl OrderEditor {
    pub fn phase(&self) -> EditorPhase {
        self.phase
    }

    pub fn selected(&self) -> Option<&Order> {
        self.selected.as_ref()
    }

    pub fn draft(&self) -> Option<&Order> {
        self.draft.as_ref()
    }

    pub fn is_saving(&self) -> bool {
        self.phase == EditorPhase::Saving
    }

    pub fn is_editing(&self) -> bool {
        matches!(self.phase, EditorPhase::Editing | EditorPhase::Saving)
    }

    /// Selects `order` (a copy becomes the draft); `None` clears the selection.
    /// Ignored while a save is in flight.
    pub fn select(&mut self, order: Option<Order>) {
        if self.is_saving() {
            log::warn!("Selection change ignored while saving");
            return;
        }
        match order {
            Some(order) => {
                self.draft = Some(order.clone());
                self.selected = Some(order);
                self.phase = EditorPhase::Viewing;
            }
            None => self.reset(),
        }
    }

    /// Back to "no selection"
    pub fn clear(&mut self) {
        self.select(None);
    }

    fn reset(&mut self) {
        self.selected = None;
        self.draft = None;
        self.phase = EditorPhase::NoSelection;
    }

    pub fn begin_edit(&mut self) -> bool {
        if self.phase != EditorPhase::Viewing {
            return false;
        }
        self.phase = EditorPhase::Editing;
        true
    }

    /// Drops unsaved changes
    pub fn cancel_edit(&mut self) {
        if self.phase == EditorPhase::Editing {
            self.draft = self.selected.clone();
            self.phase = EditorPhase::Viewing;
        }
    }

    fn edit_draft(&mut self, apply: impl FnOnce(&mut Order)) {
        if self.phase != EditorPhase::Editing {
            return;
        }
        if let Some(draft) = self.draft.as_mut() {
            apply(draft);
        }
    }

    pub fn set_name(&mut self, value: String) {
        self.edit_draft(|d| d.name = value);
    }

    pub fn set_phone1(&mut self, value: String) {
        self.edit_draft(|d| d.phone1 = value);
    }

    pub fn set_phone2(&mut self, value: String) {
        self.edit_draft(|d| d.phone2 = if value.is_empty() { None } else { Some(value) });
    }

    pub fn set_address(&mut self, value: String) {
        self.edit_draft(|d| d.address = value);
    }

    pub fn set_status(&mut self, status: OrderStatus) {
        self.edit_draft(|d| d.status = status);
    }

    /// Validates the draft and enters `Saving`.
    ///
    /// Returns the identifier and body to send. Nothing changes on error.
    pub fn begin_save(&mut self) -> Result<(String, Order), OrderError> {
        if self.is_saving() {
            return Err(OrderError::SaveInProgress);
        }
        let draft = self
            .draft
            .as_ref()
            .ok_or_else(|| OrderError::Validation("No order selected.".into()))?;
        draft.validate().map_err(OrderError::Validation)?;
        let id = draft
            .identifier()
            .ok_or_else(|| OrderError::Validation("Only existing orders can be updated.".into()))?
            .to_string();
        let body = draft.clone();
        self.phase = EditorPhase::Saving;
        Ok((id, body))
    }

    /// Applies the backend answer: success clears the selection,
    /// failure returns to `Editing` with the draft intact.
    pub fn finish_save(&mut self, result: Result<Order, OrderError>) -> Result<Order, OrderError> {
        match result {
            Ok(saved) => {
                self.reset();
                Ok(saved)
            }
            Err(e) => {
                log::error!("{}", e);
                self.phase = EditorPhase::Editing;
                Err(e)
            }
        }
    }

    /// Sends the draft as an update of the selected order
    pub async fn update<A: OrderApi + ?Sized>(&mut self, api: &A) -> Result<Order, OrderError> {
        let (id, body) = self.begin_save()?;
        let result = api.update_order(&id, &body).await;
        self.finish_save(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_order::store::tests::{order, MockOrderApi};

    fn editing(order: Order) -> OrderEditor {
        let mut editor = OrderEditor::default();
        editor.select(Some(order));
        assert!(editor.begin_edit());
        editor
    }

    #[test]
    fn test_select_and_clear() {
        let mut editor = OrderEditor::default();
        assert_eq!(editor.phase(), EditorPhase::NoSelection);

        editor.select(Some(order("1", OrderStatus::Pending)));
        assert_eq!(editor.phase(), EditorPhase::Viewing);
        assert_eq!(editor.draft(), editor.selected());

        editor.select(None);
        assert_eq!(editor.phase(), EditorPhase::NoSelection);
        assert!(editor.draft().is_none());
    }

    #[test]
    fn test_setters_only_apply_while_editing() {
        let mut editor = OrderEditor::default();
        editor.select(Some(order("1", OrderStatus::Pending)));
        editor.set_name("Ignored".into());
        assert_eq!(editor.draft().unwrap().name, "Customer 1");

        assert!(editor.begin_edit());
        editor.set_name("Renamed".into());
        editor.set_status(OrderStatus::Completed);
        editor.set_phone2(String::new());
        assert_eq!(editor.draft().unwrap().name, "Renamed");
        assert_eq!(editor.draft().unwrap().status, OrderStatus::Completed);
        assert_eq!(editor.selected().unwrap().name, "Customer 1");

        editor.cancel_edit();
        assert_eq!(editor.phase(), EditorPhase::Viewing);
        assert_eq!(editor.draft().unwrap().name, "Customer 1");
    }

    #[tokio::test]
    async fn test_validation_failure_makes_no_call() {
        let api = MockOrderApi::with_orders(vec![]);
        let cases: Vec<Box<dyn Fn(&mut OrderEditor)>> = vec![
            Box::new(|e| e.set_name(String::new())),
            Box::new(|e| e.set_phone1(String::new())),
            Box::new(|e| e.set_address(String::new())),
        ];
        for clear_field in cases {
            let mut editor = editing(order("1", OrderStatus::Pending));
            clear_field(&mut editor);
            let err = editor.update(&api).await.unwrap_err();
            assert!(matches!(err, OrderError::Validation(_)));
            assert_eq!(editor.phase(), EditorPhase::Editing);
        }

        let mut no_items = order("2", OrderStatus::Pending);
        no_items.cart_items.clear();
        let mut editor = editing(no_items);
        assert!(matches!(
            editor.update(&api).await,
            Err(OrderError::Validation(_))
        ));

        assert!(api.updates.borrow().is_empty());
    }

    #[tokio::test]
    async fn test_update_requires_identifier() {
        let api = MockOrderApi::with_orders(vec![]);
        let mut anonymous = order("1", OrderStatus::Pending);
        anonymous.object_id = None;
        let mut editor = editing(anonymous);

        assert!(matches!(
            editor.update(&api).await,
            Err(OrderError::Validation(_))
        ));
        assert!(api.updates.borrow().is_empty());
    }

    #[tokio::test]
    async fn test_successful_update_clears_selection() {
        let api = MockOrderApi::with_orders(vec![]);
        let mut editor = editing(order("1", OrderStatus::Pending));
        editor.set_status(OrderStatus::Completed);

        let saved = editor.update(&api).await.unwrap();

        assert_eq!(saved.status, OrderStatus::Completed);
        assert_eq!(editor.phase(), EditorPhase::NoSelection);
        assert!(editor.selected().is_none());
        let updates = api.updates.borrow();
        assert_eq!(updates.len(), 1);
        assert_eq!(updates[0].0, "1");
        assert_eq!(updates[0].1.cart_items, saved.cart_items);
    }

    #[tokio::test]
    async fn test_failed_update_keeps_draft() {
        let api = MockOrderApi::with_orders(vec![]);
        api.fail_next_update(OrderError::Save("Invalid address".into()));
        let mut editor = editing(order("1", OrderStatus::Pending));
        editor.set_address("nowhere".into());

        let err = editor.update(&api).await.unwrap_err();

        assert_eq!(err, OrderError::Save("Invalid address".into()));
        assert_eq!(err.detail(), "Invalid address");
        assert_eq!(editor.phase(), EditorPhase::Editing);
        assert_eq!(editor.draft().unwrap().address, "nowhere");

        // retry goes through
        assert!(editor.update(&api).await.is_ok());
        assert_eq!(api.updates.borrow().len(), 2);
    }

    #[test]
    fn test_double_submit_is_rejected() {
        let mut editor = editing(order("1", OrderStatus::Pending));
        assert!(editor.begin_save().is_ok());
        assert_eq!(editor.phase(), EditorPhase::Saving);
        assert_eq!(editor.begin_save(), Err(OrderError::SaveInProgress));

        editor.select(None);
        assert_eq!(editor.phase(), EditorPhase::Saving);

        let result = editor.finish_save(Err(OrderError::Save("timeout".into())));
        assert!(result.is_err());
        assert_eq!(editor.phase(), EditorPhase::Editing);
    }
}
