//! Trade Rows
//!
//! Offer/request slots, Robux inputs and the per-row totals.

use std::fmt;

use crate::config::{DEFAULT_AMOUNT_TO_SEND, REQUEST_WARNING_SLOTS, ROBUX_TAX_RATE, SLOTS_PER_SIDE};
use crate::models::{parse_float, parse_int, Item, TradeSubmission};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Offer,
    Request,
}

/// Address of one slot on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SlotRef {
    pub row: u32,
    pub side: Side,
    pub index: usize,
}

/// Item details copied into a slot when it is filled
#[derive(Debug, Clone, PartialEq)]
pub struct SlotItem {
    pub asset_id: String,
    pub name: String,
    pub value: f64,
    pub rap: f64,
    pub user_asset_id: Option<String>,
}

impl From<&Item> for SlotItem {
    fn from(item: &Item) -> Self {
        Self {
            asset_id: item.asset_id.clone(),
            name: item.display_name().to_string(),
            value: item.value,
            rap: item.rap,
            user_asset_id: item.user_asset_id.clone(),
        }
    }
}

pub type Slot = Option<SlotItem>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FillError {
    /// This owned copy already sits in another slot of the row
    AlreadyInTrade,
    NoSuchSlot,
}

impl fmt::Display for FillError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FillError::AlreadyInTrade => write!(f, "Item is already in this specific trade."),
            FillError::NoSuchSlot => write!(f, "Trade slot no longer exists."),
        }
    }
}

/// Profit coloring
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfitTone {
    Gain,
    Loss,
    Even,
}

impl ProfitTone {
    pub fn color(self) -> &'static str {
        match self {
            ProfitTone::Gain => "lime",
            ProfitTone::Loss => "red",
            ProfitTone::Even => "white",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RowTotals {
    /// Item values plus offered Robux
    pub offer_value: f64,
    pub offer_rap: f64,
    /// Item values plus requested Robux, before tax
    pub request_value: f64,
    pub request_rap: f64,
    /// Taxed request value minus offer value
    pub profit: f64,
    /// None when nothing of value is offered
    pub profit_percent: Option<f64>,
    pub tone: ProfitTone,
    pub show_warning: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TradeRow {
    pub id: u32,
    pub offer: Vec<Slot>,
    pub request: Vec<Slot>,
    /// Raw input text, parsed on demand
    pub robux_offer: String,
    pub robux_request: String,
    pub amount_to_send: String,
}

impl TradeRow {
    pub fn new(id: u32) -> Self {
        Self {
            id,
            offer: vec![None; SLOTS_PER_SIDE],
            request: vec![None; SLOTS_PER_SIDE],
            robux_offer: "0".to_string(),
            robux_request: "0".to_string(),
            amount_to_send: DEFAULT_AMOUNT_TO_SEND.to_string(),
        }
    }

    pub fn slots(&self, side: Side) -> &[Slot] {
        match side {
            Side::Offer => &self.offer,
            Side::Request => &self.request,
        }
    }

    fn slots_mut(&mut self, side: Side) -> &mut Vec<Slot> {
        match side {
            Side::Offer => &mut self.offer,
            Side::Request => &mut self.request,
        }
    }

    /// Both sides' slots, without the typed Robux and amount fields
    pub fn items(&self) -> (Vec<Slot>, Vec<Slot>) {
        (self.offer.clone(), self.request.clone())
    }

    pub fn slot(&self, side: Side, index: usize) -> Option<&SlotItem> {
        self.slots(side).get(index).and_then(Option::as_ref)
    }

    pub fn is_filled(&self, side: Side, index: usize) -> bool {
        self.slot(side, index).is_some()
    }

    /// Put `item` in a slot, replacing what was there.
    /// An owned copy may appear only once per row.
    pub fn fill_slot(&mut self, side: Side, index: usize, item: SlotItem) -> Result<(), FillError> {
        if index >= self.slots(side).len() {
            return Err(FillError::NoSuchSlot);
        }
        if let Some(uaid) = item.user_asset_id.as_deref() {
            let taken = [Side::Offer, Side::Request].into_iter().any(|s| {
                self.slots(s).iter().enumerate().any(|(i, slot)| {
                    !(s == side && i == index)
                        && slot.as_ref().and_then(|it| it.user_asset_id.as_deref()) == Some(uaid)
                })
            });
            if taken {
                return Err(FillError::AlreadyInTrade);
            }
        }
        self.slots_mut(side)[index] = Some(item);
        Ok(())
    }

    /// Returns the item that was removed, if any
    pub fn clear_slot(&mut self, side: Side, index: usize) -> Option<SlotItem> {
        self.slots_mut(side).get_mut(index).and_then(Option::take)
    }

    fn filled(&self, side: Side) -> impl Iterator<Item = &SlotItem> {
        self.slots(side).iter().flatten()
    }

    pub fn filled_count(&self, side: Side) -> usize {
        self.filled(side).count()
    }

    pub fn totals(&self) -> RowTotals {
        let item_offer_value: f64 = self.filled(Side::Offer).map(|it| it.value).sum();
        let item_offer_rap: f64 = self.filled(Side::Offer).map(|it| it.rap).sum();
        let item_request_value: f64 = self.filled(Side::Request).map(|it| it.value).sum();
        let item_request_rap: f64 = self.filled(Side::Request).map(|it| it.rap).sum();

        let robux_offer = parse_float(&self.robux_offer).unwrap_or(0.0);
        let robux_request = parse_float(&self.robux_request).unwrap_or(0.0);

        let offer_value = item_offer_value + robux_offer;
        let request_value = item_request_value + robux_request;

        let taxed_robux_request = robux_request * (1.0 - ROBUX_TAX_RATE);
        let profit = item_request_value + taxed_robux_request - offer_value;
        let profit_percent = (offer_value > 0.0).then(|| profit / offer_value * 100.0);

        let tone = if profit > 0.0 {
            ProfitTone::Gain
        } else if profit < 0.0 {
            ProfitTone::Loss
        } else {
            ProfitTone::Even
        };

        RowTotals {
            offer_value,
            offer_rap: item_offer_rap,
            request_value,
            request_rap: item_request_rap,
            profit,
            profit_percent,
            tone,
            show_warning: self.filled_count(Side::Request) >= REQUEST_WARNING_SLOTS,
        }
    }

    /// The row as posted to the backend, or None when nothing was entered
    pub fn submission(&self) -> Option<TradeSubmission> {
        let offer: Vec<String> = self.filled(Side::Offer).map(|it| it.asset_id.clone()).collect();
        let request: Vec<String> = self.filled(Side::Request).map(|it| it.asset_id.clone()).collect();
        let robux_offer = parse_int(&self.robux_offer).unwrap_or(0);
        let robux_request = parse_int(&self.robux_request).unwrap_or(0);
        // Zero is treated like a blank field
        let amount = parse_int(&self.amount_to_send)
            .filter(|n| *n != 0)
            .unwrap_or(DEFAULT_AMOUNT_TO_SEND);

        if offer.is_empty() && request.is_empty() && robux_offer <= 0 && robux_request <= 0 {
            return None;
        }
        Some(TradeSubmission { offer, request, robux_offer, robux_request, amount })
    }
}
