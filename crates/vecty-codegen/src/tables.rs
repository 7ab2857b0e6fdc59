//! Lookup tables from markup vocabulary to vecty identifiers.
//!
//! All keys are case-sensitive. The tables are static data indexed once on
//! first use.

use rustc_hash::{FxHashMap, FxHashSet};
use std::sync::OnceLock;

const ELEMENTS: &[(&str, &str)] = &[
    ("a", "elem.Anchor"),
    ("abbr", "elem.Abbreviation"),
    ("address", "elem.Address"),
    ("area", "elem.Area"),
    ("article", "elem.Article"),
    ("aside", "elem.ASide"),
    ("audio", "elem.Audio"),
    ("b", "elem.Bold"),
    ("base", "elem.Base"),
    ("bdi", "elem.BidirectionalIsolation"),
    ("bdo", "elem.BidirectionalOverride"),
    ("blockquote", "elem.BlockQuote"),
    ("body", "elem.Body"),
    ("br", "elem.Break"),
    ("button", "elem.Button"),
    ("canvas", "elem.Canvas"),
    ("caption", "elem.Caption"),
    ("cite", "elem.Citation"),
    ("code", "elem.Code"),
    ("col", "elem.Column"),
    ("colgroup", "elem.ColumnGroup"),
    ("data", "elem.Data"),
    ("datalist", "elem.DataList"),
    ("dd", "elem.Description"),
    ("del", "elem.DeletedText"),
    ("details", "elem.Details"),
    ("dfn", "elem.Definition"),
    ("dialog", "elem.Dialog"),
    ("div", "elem.Div"),
    ("dl", "elem.DescriptionList"),
    ("dt", "elem.DefinitionTerm"),
    ("em", "elem.Emphasis"),
    ("embed", "elem.Embed"),
    ("fieldset", "elem.FieldSet"),
    ("figcaption", "elem.FigureCaption"),
    ("figure", "elem.Figure"),
    ("footer", "elem.Footer"),
    ("form", "elem.Form"),
    ("h1", "elem.Heading1"),
    ("h2", "elem.Heading2"),
    ("h3", "elem.Heading3"),
    ("h4", "elem.Heading4"),
    ("h5", "elem.Heading5"),
    ("h6", "elem.Heading6"),
    ("header", "elem.Header"),
    ("hgroup", "elem.HeadingsGroup"),
    ("hr", "elem.HorizontalRule"),
    ("i", "elem.Italic"),
    ("iframe", "elem.InlineFrame"),
    ("img", "elem.Image"),
    ("input", "elem.Input"),
    ("ins", "elem.InsertedText"),
    ("kbd", "elem.KeyboardInput"),
    ("label", "elem.Label"),
    ("legend", "elem.Legend"),
    ("li", "elem.ListItem"),
    ("link", "elem.Link"),
    ("main", "elem.Main"),
    ("map", "elem.Map"),
    ("mark", "elem.Mark"),
    ("menu", "elem.Menu"),
    ("menuitem", "elem.MenuItem"),
    ("meta", "elem.Meta"),
    ("meter", "elem.Meter"),
    ("nav", "elem.Navigation"),
    ("noframes", "elem.NoFrames"),
    ("noscript", "elem.NoScript"),
    ("object", "elem.Object"),
    ("ol", "elem.OrderedList"),
    ("optgroup", "elem.OptionsGroup"),
    ("option", "elem.Option"),
    ("output", "elem.Output"),
    ("p", "elem.Paragraph"),
    ("param", "elem.Parameter"),
    ("picture", "elem.Picture"),
    ("pre", "elem.Preformatted"),
    ("progress", "elem.Progress"),
    ("q", "elem.Quote"),
    ("rp", "elem.RubyParenthesis"),
    ("rt", "elem.RubyText"),
    ("rtc", "elem.RubyTextContainer"),
    ("ruby", "elem.Ruby"),
    ("s", "elem.Strikethrough"),
    ("samp", "elem.Sample"),
    ("script", "elem.Script"),
    ("section", "elem.Section"),
    ("select", "elem.Select"),
    ("slot", "elem.Slot"),
    ("small", "elem.Small"),
    ("source", "elem.Source"),
    ("span", "elem.Span"),
    ("strong", "elem.Strong"),
    ("style", "elem.Style"),
    ("sub", "elem.Subscript"),
    ("summary", "elem.Summary"),
    ("sup", "elem.Superscript"),
    ("table", "elem.Table"),
    ("tbody", "elem.TableBody"),
    ("td", "elem.TableData"),
    ("template", "elem.Template"),
    ("textarea", "elem.TextArea"),
    ("tfoot", "elem.TableFoot"),
    ("th", "elem.TableHeader"),
    ("thead", "elem.TableHead"),
    ("time", "elem.Time"),
    ("tr", "elem.TableRow"),
    ("track", "elem.Track"),
    ("u", "elem.Underline"),
    ("ul", "elem.UnorderedList"),
    ("var", "elem.Variable"),
    ("video", "elem.Video"),
    ("wbr", "elem.WordBreakOpportunity"),
];

const PROPERTIES: &[(&str, &str)] = &[
    ("alt", "prop.Alt"),
    ("autofocus", "prop.Autofocus"),
    ("checked", "prop.Checked"),
    ("disabled", "prop.Disabled"),
    ("for", "prop.For"),
    ("href", "prop.Href"),
    ("id", "prop.ID"),
    ("name", "prop.Name"),
    ("placeholder", "prop.Placeholder"),
    ("src", "prop.Src"),
    ("type", "prop.Type"),
    ("value", "prop.Value"),
];

const BOOLEAN_PROPERTIES: &[&str] = &[
    "autofocus",
    "checked",
    "disabled",
];

const EVENTS: &[(&str, &str)] = &[
    ("afterprint", "event.AfterPrint"),
    ("animationend", "event.AnimationEnd"),
    ("animationiteration", "event.AnimationIteration"),
    ("animationstart", "event.AnimationStart"),
    ("appinstalled", "event.ApplicationInstalled"),
    ("audioprocess", "event.AudioProcess"),
    ("audioend", "event.AudioEnd"),
    ("audiostart", "event.AudioStart"),
    ("beforeprint", "event.BeforePrint"),
    ("beforeunload", "event.BeforeUnload"),
    ("blocked", "event.Blocked"),
    ("blur", "event.Blur"),
    ("boundary", "event.Boundary"),
    ("cached", "event.Cached"),
    ("canplay", "event.CanPlay"),
    ("canplaythrough", "event.CanPlayThrough"),
    ("change", "event.Change"),
    ("chargingchange", "event.ChargingChange"),
    ("chargingtimechange", "event.ChargingTimeChange"),
    ("checking", "event.Checking"),
    ("click", "event.Click"),
    ("close", "event.Close"),
    ("complete", "event.Complete"),
    ("compassneedscalibration", "event.compassneedscalibration"),
    ("compositionend", "event.CompositionEnd"),
    ("compositionstart", "event.CompositionStart"),
    ("compositionupdate", "event.CompositionUpdate"),
    ("contextmenu", "event.ContextMenu"),
    ("copy", "event.Copy"),
    ("cut", "event.Cut"),
    ("DOMContentLoaded", "event.DOMContentLoaded"),
    ("devicechange", "event.DeviceChange"),
    ("devicelight", "event.DeviceLight"),
    ("devicemotion", "event.DeviceMotion"),
    ("deviceorientation", "event.DeviceOrientation"),
    ("deviceproximity", "event.DeviceProximity"),
    ("dischargingtimechange", "event.DischargingTimeChange"),
    ("dblclick", "event.DoubleClick"),
    ("downloading", "event.Downloading"),
    ("drag", "event.Drag"),
    ("dragend", "event.DragEnd"),
    ("dragenter", "event.DragEnter"),
    ("dragleave", "event.DragLeave"),
    ("dragover", "event.DragOver"),
    ("dragstart", "event.DragStart"),
    ("drop", "event.Drop"),
    ("durationchange", "event.DurationChange"),
    ("emptied", "event.Emptied"),
    ("end", "event.End"),
    ("endEvent", "event.EndEvent"),
    ("ended", "event.Ended"),
    ("error", "event.Error"),
    ("focus", "event.focus"),
    ("focusin", "event.FocusIn"),
    ("focusout", "event.FocusOut"),
    ("fullscreenchange", "event.FullScreenChange"),
    ("fullscreenerror", "event.FullScreenError"),
    ("gamepadconnected", "event.GamepadConnected"),
    ("gamepaddisconnected", "event.GamepadDisconnected"),
    ("gotpointercapture", "event.GotPointerCapture"),
    ("hashchange", "event.HashChange"),
    ("input", "event.Input"),
    ("invalid", "event.Invalid"),
    ("keydown", "event.KeyDown"),
    ("keypress", "event.KeyPress"),
    ("keyup", "event.KeyUp"),
    ("languagechange", "event.LanguageChange"),
    ("levelchange", "event.LevelChange"),
    ("load", "event.Load"),
    ("loadend", "event.LoadEnd"),
    ("loadstart", "event.LoadStart"),
    ("loadeddata", "event.LoadedData"),
    ("loadedmetadata", "event.LoadedMetadata"),
    ("lostpointercapture", "event.LostPointerCapture"),
    ("mark", "event.Mark"),
    ("message", "event.Message"),
    ("messageerror", "event.MessageError"),
    ("mousedown", "event.MouseDown"),
    ("mouseenter", "event.MouseEnter"),
    ("mouseleave", "event.MouseLeave"),
    ("mousemove", "event.MouseMove"),
    ("mouseout", "event.MouseOut"),
    ("mouseover", "event.MouseOver"),
    ("mouseup", "event.MouseUp"),
    ("nomatch", "event.NoMatch"),
    ("noupdate", "event.NoUpdate"),
    ("notificationclick", "event.NotificationClick"),
    ("obsolete", "event.Obsolete"),
    ("offline", "event.Offline"),
    ("online", "event.Online"),
    ("open", "event.Open"),
    ("orientationchange", "event.OrientationChange"),
    ("pagehide", "event.PageHide"),
    ("pageshow", "event.PageShow"),
    ("paste", "event.Paste"),
    ("pause", "event.Pause"),
    ("play", "event.Play"),
    ("playing", "event.Playing"),
    ("pointercancel", "event.PointerCancel"),
    ("pointerdown", "event.PointerDown"),
    ("pointerenter", "event.PointerEnter"),
    ("pointerleave", "event.PointerLeave"),
    ("pointerlockchange", "event.PointerLockChange"),
    ("pointerlockerror", "event.PointerLockError"),
    ("pointermove", "event.PointerMove"),
    ("pointerout", "event.PointerOut"),
    ("pointerover", "event.PointerOver"),
    ("pointerup", "event.PointerUp"),
    ("popstate", "event.PopState"),
    ("progress", "event.Progress"),
    ("push", "event.Push"),
    ("pushsubscriptionchange", "event.PushSubscriptionChange"),
    ("ratechange", "event.RateChange"),
    ("readystatechange", "event.ReadyStateChange"),
    ("repeatEvent", "event.RepeatEvent"),
    ("reset", "event.Reset"),
    ("resize", "event.Resize"),
    ("resourcetimingbufferfull", "event.ResourceTimingBufferFull"),
    ("result", "event.Result"),
    ("resume", "event.Resume"),
    ("SVGAbort", "event.SVGAbort"),
    ("SVGError", "event.SVGError"),
    ("SVGLoad", "event.SVGLoad"),
    ("SVGResize", "event.SVGResize"),
    ("SVGScroll", "event.SVGScroll"),
    ("SVGUnload", "event.SVGUnload"),
    ("SVGZoom", "event.SVGZoom"),
    ("scroll", "event.Scroll"),
    ("seeked", "event.Seeked"),
    ("seeking", "event.Seeking"),
    ("select", "event.Select"),
    ("selectstart", "event.SelectStart"),
    ("selectionchange", "event.SelectionChange"),
    ("show", "event.Show"),
    ("slotchange", "event.SlotChange"),
    ("soundend", "event.SoundEnd"),
    ("soundstart", "event.SoundStart"),
    ("speechend", "event.SpeechEnd"),
    ("speechstart", "event.SpeechStart"),
    ("stalled", "event.Stalled"),
    ("start", "event.Start"),
    ("storage", "event.Storage"),
    ("submit", "event.Submit"),
    ("success", "event.Success"),
    ("suspend", "event.Suspend"),
    ("timeupdate", "event.TimeUpdate"),
    ("timeout", "event.Timeout"),
    ("touchcancel", "event.TouchCancel"),
    ("touchend", "event.TouchEnd"),
    ("touchmove", "event.TouchMove"),
    ("touchstart", "event.TouchStart"),
    ("transitionend", "event.TransitionEnd"),
    ("unload", "event.Unload"),
    ("updateready", "event.UpdateReady"),
    ("upgradeneeded", "event.UpgradeNeeded"),
    ("userproximity", "event.UserProximity"),
    ("versionchange", "event.VersionChange"),
    ("visibilitychange", "event.VisibilityChange"),
    ("voiceschanged", "event.VoicesChanged"),
    ("volumechange", "event.VolumeChange"),
    ("waiting", "event.Waiting"),
    ("wheel", "event.Wheel"),
];

const INPUT_TYPES: &[&str] = &[
    "button",
    "checkbox",
    "color",
    "date",
    "datetime",
    "datetime-local",
    "email",
    "file",
    "hidden",
    "image",
    "month",
    "number",
    "password",
    "radio",
    "range",
    "min",
    "max",
    "value",
    "step",
    "reset",
    "search",
    "submit",
    "tel",
    "text",
    "time",
    "url",
    "week",
];

struct Tables {
    elements: FxHashMap<&'static str, &'static str>,
    properties: FxHashMap<&'static str, &'static str>,
    boolean_properties: FxHashSet<&'static str>,
    events: FxHashMap<&'static str, &'static str>,
    input_types: FxHashSet<&'static str>,
}

impl Tables {
    fn load() -> Self {
        Self {
            elements: ELEMENTS.iter().copied().collect(),
            properties: PROPERTIES.iter().copied().collect(),
            boolean_properties: BOOLEAN_PROPERTIES.iter().copied().collect(),
            events: EVENTS.iter().copied().collect(),
            input_types: INPUT_TYPES.iter().copied().collect(),
        }
    }
}

fn tables() -> &'static Tables {
    static TABLES: OnceLock<Tables> = OnceLock::new();
    TABLES.get_or_init(Tables::load)
}

/// Returns the `elem` constructor for a tag name.
pub fn element(tag: &str) -> Option<&'static str> {
    tables().elements.get(tag).copied()
}

/// Returns the `prop` constructor for an attribute name.
pub fn property(attribute: &str) -> Option<&'static str> {
    tables().properties.get(attribute).copied()
}

/// Returns true if the attribute's value is emitted as a bare boolean.
pub fn is_boolean_property(attribute: &str) -> bool {
    tables().boolean_properties.contains(attribute)
}

/// Returns the `event` constructor for an event name (without the `@`).
pub fn event(name: &str) -> Option<&'static str> {
    tables().events.get(name).copied()
}

/// Returns true if `value` is one of the known `<input type>` values.
///
/// No translation rule consults this table; generated code is never rejected
/// or altered based on input types.
pub fn is_input_type(value: &str) -> bool {
    tables().input_types.contains(value)
}
