#![cfg_attr(not(feature = "std"), no_std, no_main)]

/// # Meme Token — Launch Token with Transfer Tax
///
/// **Role:** fixed-supply token ledger with a controller-gated launch
/// sequence, direction-aware transfer taxation, and one-call DEX listing.
///
/// ## Launch lifecycle
///
/// ```text
/// deploy               full supply minted to the deployer (the owner);
///   │                  trading gate closed, all tax rates start at 0;
///   │                  the token/wrapped-native pair is created through
///   │                  the router's factory and fixed for life
///   ├─ update_tax_rates / update_wallets     configure the tax policy
///   ├─ add_liquidity                         seed the pair (≥ 0.5 native)
///   └─ enable_trading                        one-way gate: open forever
/// ```
///
/// While the gate is closed, only the owner, the contract's own account
/// and fee-exempt accounts can move tokens.  That window is what lets the
/// owner distribute, list and configure before the public can trade.
///
/// ## Tax routing
///
/// A transfer touching the pair is classified by direction; every other
/// transfer moves untaxed.
///
/// ```text
/// BUY   pair → account  (recipient ≠ router):   rate = buy_tax   (≤ 10%)
/// SELL  account → pair  (sender    ≠ router):   rate = sell_tax  (≤ 15%)
///
/// tax       = amount × rate / 100
/// dev       = tax × dev_fee / max(buy_tax, sell_tax)
/// marketing = (tax − dev) / 2
/// liquidity = tax − dev − marketing         (odd unit lands here)
/// net       = amount − tax
///
/// Settlement order: dev wallet, marketing wallet, liquidity wallet,
/// then net to the recipient.  A failing leg rejects the whole call.
/// ```
///
/// The dev slice always divides by the LARGER of the two configured rates,
/// so when `buy_tax < sell_tax` a buy under-fills the dev wallet relative
/// to the nominal dev percentage.  Wallet accounting downstream expects
/// exactly this split; do not normalise it to the active rate.
///
/// Taxes never leave the ledger: the sum of all balances equals
/// `total_supply` at every point in time.
///
/// **Compatibility:** ink! 5 / `pallet-contracts` (WASM).
#[ink::contract]
mod meme_token {
    use ink::env::call::{build_call, ExecutionInput, Selector};
    use ink::env::DefaultEnvironment;
    use ink::prelude::string::String;
    use ink::prelude::vec::Vec;
    use ink::storage::Mapping;

    // =========================================================================
    // CONSTANTS
    // =========================================================================

    /// Denominator for whole-percent tax calculations.
    pub const PERCENT_DENOMINATOR: u128 = 100;

    // ── Rate caps ─────────────────────────────────────────────────────────────

    /// Hard cap on the buy-side tax rate (whole percent).
    pub const MAX_BUY_TAX: u8 = 10;

    /// Hard cap on the sell-side tax rate (whole percent).
    pub const MAX_SELL_TAX: u8 = 15;

    /// Hard cap on the dev slice of the collected tax (whole percent).
    /// Not bounded by the trade rates: a dev fee above both rates passes
    /// the cap check but makes every taxed transfer fail closed (the split
    /// would go negative and the arithmetic guard rejects the call).
    pub const MAX_DEV_FEE: u8 = 5;

    // ── Liquidity provisioning ────────────────────────────────────────────────

    /// Minimum native value that must accompany `add_liquidity`
    /// (0.5 units at 18 decimals).
    pub const MIN_LIQUIDITY_NATIVE: Balance = 500_000_000_000_000_000;

    /// Deadline slack handed to the router, in milliseconds.
    pub const ROUTER_DEADLINE_MS: Timestamp = 300_000;

    // ── Misc ──────────────────────────────────────────────────────────────────

    /// All-zero account id.  Rejected as a transfer party and as an
    /// operational wallet; doubles as the "no live DEX" router marker.
    pub const ZERO_ACCOUNT: [u8; 32] = [0u8; 32];

    // =========================================================================
    // STORAGE
    // =========================================================================

    #[ink(storage)]
    pub struct MemeToken {
        // ── Token metadata ────────────────────────────────────────────────
        name: String,
        symbol: String,
        decimals: u8,
        total_supply: Balance,

        // ── Ledger ────────────────────────────────────────────────────────
        balances: Mapping<AccountId, Balance>,
        allowances: Mapping<(AccountId, AccountId), Balance>,

        // ── Access control ────────────────────────────────────────────────
        owner: AccountId,

        // ── Trading gate ──────────────────────────────────────────────────
        /// One-way launch switch.  `false` at deployment; flipped once by
        /// `enable_trading` and never cleared again.
        trading_enabled: bool,

        // ── Tax policy ────────────────────────────────────────────────────
        /// Whole-percent rates.  All zero until the owner configures them.
        buy_tax: u8,
        sell_tax: u8,
        dev_fee: u8,
        dev_wallet: AccountId,
        marketing_wallet: AccountId,
        liquidity_wallet: AccountId,

        // ── Fee exemptions ────────────────────────────────────────────────
        /// Accounts that trade untaxed and bypass the trading gate.
        fee_exempt: Mapping<AccountId, bool>,

        // ── DEX wiring ────────────────────────────────────────────────────
        /// AMM router used for liquidity provisioning.  Transfers between
        /// the router and the pair are internal AMM legs and stay untaxed.
        router: AccountId,
        /// The token/wrapped-native pair.  Fixed at construction; transfer
        /// direction relative to this account decides buy vs. sell.
        pair: AccountId,
    }

    // =========================================================================
    // EVENTS
    // =========================================================================

    #[ink(event)]
    pub struct Transfer {
        #[ink(topic)]
        from: Option<AccountId>,
        #[ink(topic)]
        to: Option<AccountId>,
        value: Balance,
    }

    #[ink(event)]
    pub struct Approval {
        #[ink(topic)]
        owner: AccountId,
        #[ink(topic)]
        spender: AccountId,
        value: Balance,
    }

    /// Emitted once, when the owner opens the trading gate.
    #[ink(event)]
    pub struct TradingEnabled {
        block: BlockNumber,
    }

    /// Emitted when an account's fee exemption is granted or revoked.
    #[ink(event)]
    pub struct FeeExemptionSet {
        #[ink(topic)]
        account: AccountId,
        exempt: bool,
    }

    /// Emitted when the owner replaces the tax rates.  All three fields
    /// carry the new values.
    #[ink(event)]
    pub struct TaxRatesUpdated {
        buy_tax: u8,
        sell_tax: u8,
        dev_fee: u8,
    }

    /// Emitted when the owner replaces the operational wallets.
    #[ink(event)]
    pub struct WalletsUpdated {
        dev: AccountId,
        marketing: AccountId,
        liquidity: AccountId,
    }

    /// Emitted after a liquidity provisioning call.  `liquidity` is the LP
    /// amount reported by the router (zero when no live DEX is wired).
    #[ink(event)]
    pub struct LiquidityAdded {
        token_amount: Balance,
        native_amount: Balance,
        liquidity: Balance,
    }

    // =========================================================================
    // ERRORS
    // =========================================================================

    #[derive(Debug, PartialEq, Eq, scale::Encode, scale::Decode)]
    #[cfg_attr(feature = "std", derive(scale_info::TypeInfo))]
    pub enum Error {
        /// Caller is not the contract owner.
        NotOwner,
        /// `enable_trading` was already called; the gate is one-way.
        TradingAlreadyEnabled,
        /// Trading is gated and neither party is privileged or exempt.
        TradingNotActive,
        /// A tax rate exceeds its hard cap.
        TaxAboveCap,
        /// The zero account was passed where a real account is required.
        InvalidAddress,
        /// Attached native value is below `MIN_LIQUIDITY_NATIVE`.
        InsufficientNativeValue,
        /// Sender's token balance is insufficient.
        InsufficientBalance,
        /// Spender's allowance is insufficient.
        InsufficientAllowance,
        /// An arithmetic operation overflowed or underflowed.
        Overflow,
        /// The cross-contract call to the AMM router failed.
        RouterCallFailed,
    }

    // =========================================================================
    // CROSS-CONTRACT INTERFACES
    // =========================================================================

    /// Pair factory surface.  Called once, during construction, to create
    /// the token/wrapped-native pair.  A failed call reverts deployment.
    ///
    /// Dispatch goes through `build_call` below; the trait documents the
    /// selector surface.
    #[allow(dead_code)]
    #[ink::trait_definition]
    pub trait PairFactory {
        /// Create (or return the existing) pair for the two tokens.
        #[ink(message)]
        fn create_pair(&mut self, token_a: AccountId, token_b: AccountId) -> AccountId;
    }

    /// AMM router surface.  `add_liquidity_native` is the only method this
    /// contract invokes after deployment; the swap entry point is part of
    /// the router contract this token targets and is declared for
    /// completeness.
    #[allow(dead_code)]
    #[ink::trait_definition]
    pub trait DexRouter {
        /// The factory this router routes through.
        #[ink(message)]
        fn factory(&self) -> AccountId;

        /// The chain's wrapped-native token.
        #[ink(message)]
        fn wrapped_native(&self) -> AccountId;

        /// Add token/native liquidity.  Draws up to `amount_token_desired`
        /// from the caller's approved balance, pairs it with the attached
        /// native value and credits LP tokens to `to`.  Returns
        /// `(token_used, native_used, liquidity_issued)`.
        #[ink(message, payable)]
        fn add_liquidity_native(
            &mut self,
            token: AccountId,
            amount_token_desired: Balance,
            amount_token_min: Balance,
            amount_native_min: Balance,
            to: AccountId,
            deadline: Timestamp,
        ) -> (Balance, Balance, Balance);

        /// Swap variant that tolerates tokens taking a fee on transfer,
        /// settling whatever arrives instead of a quoted amount.
        #[ink(message)]
        fn swap_exact_tokens_for_native_supporting_fees(
            &mut self,
            amount_in: Balance,
            amount_out_min: Balance,
            path: Vec<AccountId>,
            to: AccountId,
            deadline: Timestamp,
        );
    }

    // =========================================================================
    // IMPLEMENTATION
    // =========================================================================

    impl MemeToken {
        // ---------------------------------------------------------------------
        // Constructors
        // ---------------------------------------------------------------------

        /// Deploy the token and wire its pair.
        ///
        /// Mints `initial_supply` entirely to the deployer, who becomes the
        /// owner.  The pair is created through `router`'s factory against
        /// the wrapped-native token and is fixed for the contract's life.
        /// The deployer and the three operational wallets start fee-exempt;
        /// rates start at zero and trading starts gated.
        #[ink(constructor)]
        pub fn new(
            name: String,
            symbol: String,
            initial_supply: Balance,
            dev_wallet: AccountId,
            marketing_wallet: AccountId,
            liquidity_wallet: AccountId,
            router: AccountId,
        ) -> Self {
            let factory: AccountId = build_call::<DefaultEnvironment>()
                .call(router)
                .exec_input(ExecutionInput::new(Selector::new(ink::selector_bytes!(
                    "factory"
                ))))
                .returns::<AccountId>()
                .invoke();
            let wrapped_native: AccountId = build_call::<DefaultEnvironment>()
                .call(router)
                .exec_input(ExecutionInput::new(Selector::new(ink::selector_bytes!(
                    "wrapped_native"
                ))))
                .returns::<AccountId>()
                .invoke();
            let pair: AccountId = build_call::<DefaultEnvironment>()
                .call(factory)
                .exec_input(
                    ExecutionInput::new(Selector::new(ink::selector_bytes!("create_pair")))
                        .push_arg(Self::env().account_id())
                        .push_arg(wrapped_native),
                )
                .returns::<AccountId>()
                .invoke();

            Self::with_pair(
                name,
                symbol,
                initial_supply,
                dev_wallet,
                marketing_wallet,
                liquidity_wallet,
                router,
                pair,
            )
        }

        /// Deploy against an already-existing pair, skipping the factory
        /// call.  A zero `router` marks an environment without a live DEX:
        /// `add_liquidity` then records the provisioning locally instead of
        /// calling out.
        #[ink(constructor)]
        pub fn with_pair(
            name: String,
            symbol: String,
            initial_supply: Balance,
            dev_wallet: AccountId,
            marketing_wallet: AccountId,
            liquidity_wallet: AccountId,
            router: AccountId,
            pair: AccountId,
        ) -> Self {
            let caller = Self::env().caller();
            let mut balances = Mapping::default();
            balances.insert(caller, &initial_supply);

            Self::env().emit_event(Transfer {
                from: None,
                to: Some(caller),
                value: initial_supply,
            });

            let mut fee_exempt = Mapping::default();
            fee_exempt.insert(caller, &true);
            fee_exempt.insert(dev_wallet, &true);
            fee_exempt.insert(marketing_wallet, &true);
            fee_exempt.insert(liquidity_wallet, &true);

            Self {
                name,
                symbol,
                decimals: 18,
                total_supply: initial_supply,
                balances,
                allowances: Mapping::default(),
                owner: caller,
                trading_enabled: false,
                buy_tax: 0,
                sell_tax: 0,
                dev_fee: 0,
                dev_wallet,
                marketing_wallet,
                liquidity_wallet,
                fee_exempt,
                router,
                pair,
            }
        }

        // =====================================================================
        // TOKEN TRANSFERS
        // =====================================================================

        /// Transfer `value` to `to`, subject to the gate and tax policy.
        #[ink(message)]
        pub fn transfer(&mut self, to: AccountId, value: Balance) -> Result<(), Error> {
            let from = self.env().caller();
            self.process_transfer(from, to, value)
        }

        #[ink(message)]
        pub fn approve(&mut self, spender: AccountId, value: Balance) -> Result<(), Error> {
            let owner = self.env().caller();
            self.approve_impl(owner, spender, value);
            Ok(())
        }

        /// Transfer on behalf of `from` within the caller's allowance.
        /// The moved amount runs through the same gate and tax policy as a
        /// direct transfer; the allowance is spent on the gross amount.
        #[ink(message)]
        pub fn transfer_from(
            &mut self,
            from: AccountId,
            to: AccountId,
            value: Balance,
        ) -> Result<(), Error> {
            let caller = self.env().caller();
            let current_allowance = self.allowance(from, caller);
            if current_allowance < value {
                return Err(Error::InsufficientAllowance);
            }
            self.allowances
                .insert((from, caller), &current_allowance.saturating_sub(value));
            self.process_transfer(from, to, value)
        }

        // =====================================================================
        // TRADING GATE
        // =====================================================================

        /// Open the trading gate.  One-way: a second call fails and nothing
        /// can ever close the gate again.
        #[ink(message)]
        pub fn enable_trading(&mut self) -> Result<(), Error> {
            self.only_owner()?;
            if self.trading_enabled {
                return Err(Error::TradingAlreadyEnabled);
            }
            self.trading_enabled = true;
            self.env().emit_event(TradingEnabled {
                block: self.env().block_number(),
            });
            Ok(())
        }

        // =====================================================================
        // TAX POLICY ADMINISTRATION
        // =====================================================================

        /// Replace all three tax rates (whole percent).
        ///
        /// Caps: buy ≤ 10, sell ≤ 15, dev ≤ 5.  Any rate above its cap
        /// rejects the whole update and leaves every rate unchanged.
        #[ink(message)]
        pub fn update_tax_rates(
            &mut self,
            buy_tax: u8,
            sell_tax: u8,
            dev_fee: u8,
        ) -> Result<(), Error> {
            self.only_owner()?;
            if buy_tax > MAX_BUY_TAX || sell_tax > MAX_SELL_TAX || dev_fee > MAX_DEV_FEE {
                return Err(Error::TaxAboveCap);
            }
            self.buy_tax = buy_tax;
            self.sell_tax = sell_tax;
            self.dev_fee = dev_fee;
            self.env().emit_event(TaxRatesUpdated {
                buy_tax,
                sell_tax,
                dev_fee,
            });
            Ok(())
        }

        /// Replace the three operational wallets.
        ///
        /// Rejects the zero account for any slot.  New wallets are marked
        /// fee-exempt (re-marking an already-exempt account is a no-op);
        /// previous wallets keep whatever exemption they had.
        #[ink(message)]
        pub fn update_wallets(
            &mut self,
            dev: AccountId,
            marketing: AccountId,
            liquidity: AccountId,
        ) -> Result<(), Error> {
            self.only_owner()?;
            let zero = AccountId::from(ZERO_ACCOUNT);
            if dev == zero || marketing == zero || liquidity == zero {
                return Err(Error::InvalidAddress);
            }
            self.dev_wallet = dev;
            self.marketing_wallet = marketing;
            self.liquidity_wallet = liquidity;
            self.fee_exempt.insert(dev, &true);
            self.fee_exempt.insert(marketing, &true);
            self.fee_exempt.insert(liquidity, &true);
            self.env().emit_event(WalletsUpdated {
                dev,
                marketing,
                liquidity,
            });
            Ok(())
        }

        /// Grant or revoke an account's fee exemption.
        #[ink(message)]
        pub fn set_fee_exempt(&mut self, account: AccountId, exempt: bool) -> Result<(), Error> {
            self.only_owner()?;
            self.fee_exempt.insert(account, &exempt);
            self.env().emit_event(FeeExemptionSet { account, exempt });
            Ok(())
        }

        // =====================================================================
        // LIQUIDITY PROVISIONING
        // =====================================================================

        /// Pair `token_amount` of the contract's own tokens with the
        /// attached native value and credit the LP tokens to the owner.
        ///
        /// The attached value must be at least 0.5 native units.  Both
        /// router minimums are passed as zero, so the router settles at
        /// whatever ratio it quotes; this call exists to seed the initial
        /// listing and must not be pointed at a pool holding third-party
        /// liquidity.
        #[ink(message, payable)]
        pub fn add_liquidity(&mut self, token_amount: Balance) -> Result<(), Error> {
            self.only_owner()?;
            let native_value = self.env().transferred_value();
            if native_value < MIN_LIQUIDITY_NATIVE {
                return Err(Error::InsufficientNativeValue);
            }

            if self.router == AccountId::from(ZERO_ACCOUNT) {
                // No live DEX wired: record the provisioning locally.
                self.env().emit_event(LiquidityAdded {
                    token_amount,
                    native_amount: native_value,
                    liquidity: 0,
                });
                return Ok(());
            }

            // Authorize the router to draw the tokens from this contract.
            let contract = self.env().account_id();
            self.approve_impl(contract, self.router, token_amount);

            let deadline = self.env().block_timestamp() + ROUTER_DEADLINE_MS;
            let call_result = build_call::<DefaultEnvironment>()
                .call(self.router)
                .transferred_value(native_value)
                .exec_input(
                    ExecutionInput::new(Selector::new(ink::selector_bytes!(
                        "add_liquidity_native"
                    )))
                    .push_arg(contract)
                    .push_arg(token_amount)
                    .push_arg(0u128) // amount_token_min: initial listing, no floor
                    .push_arg(0u128) // amount_native_min: initial listing, no floor
                    .push_arg(self.owner)
                    .push_arg(deadline),
                )
                .returns::<(Balance, Balance, Balance)>()
                .try_invoke();

            match call_result {
                Ok(Ok((token_used, native_used, liquidity))) => {
                    self.env().emit_event(LiquidityAdded {
                        token_amount: token_used,
                        native_amount: native_used,
                        liquidity,
                    });
                    Ok(())
                }
                _ => Err(Error::RouterCallFailed),
            }
        }

        /// Accept plain native transfers (router refunds of unused value).
        #[ink(message, payable)]
        pub fn deposit(&mut self) {}

        // =====================================================================
        // VIEW FUNCTIONS
        // =====================================================================

        #[ink(message)]
        pub fn name(&self) -> String {
            self.name.clone()
        }

        #[ink(message)]
        pub fn symbol(&self) -> String {
            self.symbol.clone()
        }

        #[ink(message)]
        pub fn decimals(&self) -> u8 {
            self.decimals
        }

        #[ink(message)]
        pub fn total_supply(&self) -> Balance {
            self.total_supply
        }

        #[ink(message)]
        pub fn balance_of(&self, account: AccountId) -> Balance {
            self.balances.get(account).unwrap_or(0)
        }

        #[ink(message)]
        pub fn allowance(&self, owner: AccountId, spender: AccountId) -> Balance {
            self.allowances.get((owner, spender)).unwrap_or(0)
        }

        #[ink(message)]
        pub fn is_fee_exempt(&self, account: AccountId) -> bool {
            self.fee_exempt.get(account).unwrap_or(false)
        }

        #[ink(message)]
        pub fn is_trading_enabled(&self) -> bool {
            self.trading_enabled
        }

        /// Current `(buy_tax, sell_tax, dev_fee)` in whole percent.
        #[ink(message)]
        pub fn get_tax_rates(&self) -> (u8, u8, u8) {
            (self.buy_tax, self.sell_tax, self.dev_fee)
        }

        /// Current `(dev, marketing, liquidity)` wallets.
        #[ink(message)]
        pub fn get_wallets(&self) -> (AccountId, AccountId, AccountId) {
            (self.dev_wallet, self.marketing_wallet, self.liquidity_wallet)
        }

        #[ink(message)]
        pub fn get_owner(&self) -> AccountId {
            self.owner
        }

        #[ink(message)]
        pub fn get_pair(&self) -> AccountId {
            self.pair
        }

        #[ink(message)]
        pub fn get_router(&self) -> AccountId {
            self.router
        }

        // =====================================================================
        // TRANSFER ENGINE
        // =====================================================================

        /// Route one transfer through the gate and tax policy.
        ///
        /// ```text
        /// 1. reject the zero account on either side
        /// 2. gate: while trading is disabled, pass only if
        ///      sender == owner, or recipient == owner,
        ///      or sender == this contract,
        ///      or either side is fee-exempt
        /// 3. either side fee-exempt        → full amount, no tax
        /// 4. sender == pair, to ≠ router   → buy,  rate = buy_tax
        ///    recipient == pair, from ≠ router → sell, rate = sell_tax
        ///    anything else                 → rate = 0
        /// 5. tax == 0                      → full amount, no split
        /// 6. split tax, settle dev / marketing / liquidity, then net
        /// ```
        fn process_transfer(
            &mut self,
            from: AccountId,
            to: AccountId,
            value: Balance,
        ) -> Result<(), Error> {
            let zero = AccountId::from(ZERO_ACCOUNT);
            if from == zero || to == zero {
                return Err(Error::InvalidAddress);
            }

            if !self.trading_enabled
                && from != self.owner
                && to != self.owner
                && from != self.env().account_id()
                && !self.is_fee_exempt(from)
                && !self.is_fee_exempt(to)
            {
                return Err(Error::TradingNotActive);
            }

            if self.is_fee_exempt(from) || self.is_fee_exempt(to) {
                return self.move_balance(from, to, value);
            }

            let rate = if from == self.pair && to != self.router {
                self.buy_tax
            } else if to == self.pair && from != self.router {
                self.sell_tax
            } else {
                0
            };

            let tax_amount = if rate == 0 {
                0
            } else {
                value
                    .checked_mul(Balance::from(rate))
                    .ok_or(Error::Overflow)?
                    .checked_div(PERCENT_DENOMINATOR)
                    .ok_or(Error::Overflow)?
            };
            if tax_amount == 0 {
                return self.move_balance(from, to, value);
            }

            // The dev slice divides by the larger configured rate in both
            // directions, not by the rate that produced the tax.
            let max_rate = Balance::from(self.buy_tax.max(self.sell_tax));
            let dev_amount = tax_amount
                .checked_mul(Balance::from(self.dev_fee))
                .ok_or(Error::Overflow)?
                .checked_div(max_rate)
                .ok_or(Error::Overflow)?;
            // Underflows when dev_fee exceeds both trade rates; the whole
            // transfer is rejected rather than settling a negative slice.
            let remaining_tax = tax_amount
                .checked_sub(dev_amount)
                .ok_or(Error::Overflow)?;
            let marketing_amount = remaining_tax
                .checked_div(2)
                .ok_or(Error::Overflow)?;
            let liquidity_amount = remaining_tax.saturating_sub(marketing_amount);
            let net_amount = value.saturating_sub(tax_amount);

            self.move_balance(from, self.dev_wallet, dev_amount)?;
            self.move_balance(from, self.marketing_wallet, marketing_amount)?;
            self.move_balance(from, self.liquidity_wallet, liquidity_amount)?;
            self.move_balance(from, to, net_amount)
        }

        fn move_balance(
            &mut self,
            from: AccountId,
            to: AccountId,
            value: Balance,
        ) -> Result<(), Error> {
            self.debit_balance(from, value)?;
            self.credit_balance(to, value)?;
            self.env().emit_event(Transfer {
                from: Some(from),
                to: Some(to),
                value,
            });
            Ok(())
        }

        fn debit_balance(&mut self, account: AccountId, amount: Balance) -> Result<(), Error> {
            let balance = self.balance_of(account);
            if balance < amount {
                return Err(Error::InsufficientBalance);
            }
            self.balances.insert(account, &balance.saturating_sub(amount));
            Ok(())
        }

        fn credit_balance(&mut self, account: AccountId, amount: Balance) -> Result<(), Error> {
            let balance = self.balance_of(account);
            let new_balance = balance.checked_add(amount).ok_or(Error::Overflow)?;
            self.balances.insert(account, &new_balance);
            Ok(())
        }

        fn approve_impl(&mut self, owner: AccountId, spender: AccountId, value: Balance) {
            self.allowances.insert((owner, spender), &value);
            self.env().emit_event(Approval {
                owner,
                spender,
                value,
            });
        }

        fn only_owner(&self) -> Result<(), Error> {
            if self.env().caller() != self.owner {
                return Err(Error::NotOwner);
            }
            Ok(())
        }
    }

    // =========================================================================
    // UNIT TESTS
    // =========================================================================
    //
    // Cast:
    //   alice           = deployer / owner
    //   bob, charlie    = ordinary traders
    //   django          = dev wallet
    //   eve             = marketing wallet
    //   frank           = liquidity wallet
    //   0x50…/0x52…/0x54… = pair / router / this contract

}
