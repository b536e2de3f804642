mod accounts;
mod amount;
mod confirmation;
mod delegation;
mod device;
mod icon;
mod provider;
mod validators;
