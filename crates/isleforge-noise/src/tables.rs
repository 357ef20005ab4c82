//! Lattice constant tables.
//!
//! These values determine every noise sample bit for bit; a seed only
//! reproduces the same terrain while they stay exactly as tabulated.

/// Gradient directions for 2D gradient noise, indexed by `hash & 7`.
pub const GRAD_2D: [[f32; 2]; 8] = [
    [-1.0, -1.0],
    [1.0, -1.0],
    [-1.0, 1.0],
    [1.0, 1.0],
    [0.0, -1.0],
    [-1.0, 0.0],
    [0.0, 1.0],
    [1.0, 0.0],
];

/// Gradient directions for 3D gradient noise, indexed by `hash & 15`.
pub const GRAD_3D: [[f32; 3]; 16] = [
    [1.0, 1.0, 0.0],
    [-1.0, 1.0, 0.0],
    [1.0, -1.0, 0.0],
    [-1.0, -1.0, 0.0],
    [1.0, 0.0, 1.0],
    [-1.0, 0.0, 1.0],
    [1.0, 0.0, -1.0],
    [-1.0, 0.0, -1.0],
    [0.0, 1.0, 1.0],
    [0.0, -1.0, 1.0],
    [0.0, 1.0, -1.0],
    [0.0, -1.0, -1.0],
    [1.0, 1.0, 0.0],
    [0.0, -1.0, 1.0],
    [-1.0, 1.0, 0.0],
    [0.0, -1.0, -1.0],
];

/// Near-unit 2D vectors for cellular feature points and gradient perturbation.
#[rustfmt::skip]
pub const CELL_2D: [[f32; 2]; 256] = [
    [-0.2700222, -0.9628541],
    [0.386309266, -0.9223693],
    [0.04444859, -0.9990117],
    [-0.599252343, -0.800560236],
    [-0.781928, 0.62336874],
    [0.9464672, 0.322799921],
    [-0.6514147, -0.7587219],
    [0.937847257, 0.347048372],
    [-0.8497876, -0.527125239],
    [-0.879042566, 0.476743251],
    [-0.8923003, -0.451442361],
    [-0.379844427, -0.9250504],
    [-0.9951651, 0.09821638],
    [0.7724398, -0.635088],
    [0.757328331, -0.6530343],
    [-0.9928005, -0.119780056],
    [-0.05326657, 0.998580337],
    [0.975425363, -0.220330074],
    [-0.766501844, 0.642242134],
    [0.9916367, 0.129060611],
    [-0.994696856, 0.102850378],
    [-0.537920535, -0.8429955],
    [0.502281547, -0.864704132],
    [0.455982149, -0.8899889],
    [-0.8659131, -0.50019443],
    [0.08794584, -0.9961253],
    [-0.5051685, 0.8630207],
    [0.7753185, -0.6315704],
    [-0.692194462, 0.72171104],
    [-0.519165933, -0.854673445],
    [0.8978623, -0.4402764],
    [-0.170677409, 0.985326946],
    [-0.935343, -0.353742063],
    [-0.999240458, 0.0389674678],
    [-0.2882064, -0.9575683],
    [-0.966381133, 0.2571138],
    [-0.875971437, -0.482363015],
    [-0.8303123, -0.557298362],
    [0.0511013381, -0.998693466],
    [-0.855837345, -0.517245054],
    [0.0988702551, 0.9951003],
    [0.9189016, 0.394486785],
    [-0.243937582, -0.969790936],
    [-0.812140942, -0.5834613],
    [-0.99104315, 0.133542135],
    [0.8492424, -0.528003156],
    [-0.9717839, -0.235872954],
    [0.9949457, 0.100414209],
    [0.6241065, -0.7813392],
    [0.6629103, 0.748698831],
    [-0.7197418, 0.6942418],
    [-0.8143371, -0.580392241],
    [0.104521051, -0.9945227],
    [-0.10659261, -0.99430275],
    [0.445799679, -0.8951328],
    [0.105547406, 0.99441427],
    [-0.9927903, 0.119864449],
    [-0.833436668, 0.552615047],
    [0.9115562, -0.4111756],
    [0.8285545, -0.55990845],
    [0.7217098, -0.6921958],
    [0.494049281, -0.8694339],
    [-0.36523214, -0.9309165],
    [-0.9696607, 0.244454846],
    [0.0892550945, -0.9960088],
    [0.5354071, -0.8445941],
    [-0.105357617, 0.9944344],
    [-0.989028454, 0.1477251],
    [0.004856105, 0.9999882],
    [0.988559842, 0.150829136],
    [0.928612947, -0.371049821],
    [-0.5832394, -0.8123003],
    [0.301520765, 0.9534596],
    [-0.957511067, 0.288396567],
    [0.9715802, -0.236710548],
    [0.2299818, 0.973194957],
    [0.9557638, -0.2941352],
    [0.7409561, 0.671553433],
    [-0.9971514, -0.07542631],
    [0.69057107, -0.7232645],
    [-0.2907137, -0.9568101],
    [0.5912778, -0.80646795],
    [-0.945459247, -0.3257405],
    [0.666445553, 0.7455537],
    [0.6236135, 0.781732857],
    [0.9126994, -0.408631653],
    [-0.8191762, 0.573541939],
    [-0.8812746, -0.4726046],
    [0.995331347, 0.09651673],
    [0.985565066, -0.169296965],
    [-0.8495981, 0.527430654],
    [0.6174854, -0.786582351],
    [0.850815654, 0.5254643],
    [0.998503268, -0.0546925],
    [0.197137162, -0.980375946],
    [0.660785556, -0.7505747],
    [-0.0309749413, 0.9995202],
    [-0.6731661, 0.739491343],
    [-0.719501853, -0.694490552],
    [0.972751141, 0.2318516],
    [0.9997059, -0.02425069],
    [0.442178756, -0.896926939],
    [0.9981351, -0.0610436723],
    [-0.9173661, -0.398044556],
    [-0.81500566, -0.579453],
    [-0.878933132, 0.476945],
    [0.0158605836, 0.999874234],
    [-0.8095465, 0.5870558],
    [-0.9165899, -0.399828672],
    [-0.8023543, 0.5968481],
    [-0.5176738, 0.855578065],
    [-0.8154407, -0.578840554],
    [0.402201027, -0.915551364],
    [-0.9052557, -0.4248672],
    [0.7317446, 0.681579],
    [-0.564763248, -0.825253],
    [-0.8403276, -0.542078853],
    [-0.931428134, 0.363925248],
    [0.523819864, 0.851829052],
    [0.7432804, -0.66898],
    [-0.9853716, -0.170419738],
    [0.460146874, 0.887842834],
    [0.8258554, 0.563881934],
    [0.6182366, 0.785992],
    [0.833150268, -0.553046644],
    [0.150030747, 0.9886813],
    [-0.6623304, -0.7492119],
    [-0.668598652, 0.743623435],
    [0.7025606, 0.7116239],
    [-0.541938961, -0.840417862],
    [-0.338861644, 0.9408362],
    [0.833153, 0.553042531],
    [-0.29897207, -0.954261839],
    [0.2638523, 0.9645631],
    [0.124108739, -0.9922686],
    [-0.7282649, -0.6852957],
    [0.69625, 0.717799366],
    [-0.918353558, 0.395761],
    [-0.6326102, -0.7744703],
    [-0.9331892, -0.35938552],
    [-0.115377933, -0.993321657],
    [0.9514975, -0.307656556],
    [-0.08987977, -0.9959526],
    [0.6678497, 0.7442962],
    [0.795240045, -0.6062947],
    [-0.6462007, -0.7631675],
    [-0.273359865, 0.961911857],
    [0.966959, -0.254931837],
    [-0.9792895, 0.202465191],
    [-0.5369503, -0.843613863],
    [-0.270036459, -0.9628501],
    [-0.6400277, 0.768351853],
    [-0.785453737, -0.6189204],
    [0.0600590557, -0.9981948],
    [-0.0245577041, 0.9996984],
    [-0.659836233, 0.7514095],
    [-0.625389457, -0.7803128],
    [-0.6210409, -0.7837782],
    [0.8348889, 0.550418556],
    [-0.15922752, 0.9872419],
    [0.836762249, 0.547566354],
    [-0.8675754, -0.4973057],
    [-0.202266261, -0.97933054],
    [0.939919, 0.341397554],
    [0.987740457, -0.1561049],
    [-0.903445542, 0.428702831],
    [0.126980424, -0.9919052],
    [-0.3819601, 0.924178839],
    [0.9754626, 0.220165253],
    [-0.320401579, -0.947281837],
    [-0.9874761, 0.157768741],
    [0.0253534839, -0.999678552],
    [0.4835131, -0.8753371],
    [-0.28508, -0.9585037],
    [-0.06805516, -0.997681558],
    [-0.7885244, -0.615003467],
    [0.3185392, -0.9479097],
    [0.8880043, 0.459835142],
    [0.647692144, -0.761902153],
    [0.982024133, 0.188755423],
    [0.935727537, -0.352723718],
    [-0.889489532, 0.456955522],
    [0.7922791, 0.6101588],
    [0.748381853, 0.663268149],
    [-0.728893, -0.684627652],
    [0.8729033, -0.487893283],
    [0.8288346, 0.5594937],
    [0.08074567, 0.996734738],
    [0.979914844, -0.1994165],
    [-0.5807307, -0.814095736],
    [-0.470004976, -0.8826638],
    [0.2409493, 0.9705377],
    [0.9437817, -0.330569416],
    [-0.892799854, -0.45045355],
    [-0.806962252, 0.590603054],
    [0.0625897348, 0.998039365],
    [-0.931259751, 0.364355981],
    [0.577744961, 0.816217363],
    [-0.3360096, -0.9418586],
    [0.697932065, -0.716163933],
    [-0.00200815732, -0.999998],
    [-0.182729438, -0.983163238],
    [-0.6523912, 0.7578824],
    [-0.430262685, -0.9027037],
    [-0.9985126, -0.0545209125],
    [-0.0102810217, -0.999947131],
    [-0.494607121, 0.869116664],
    [-0.299935, 0.953959644],
    [0.8165472, 0.5772787],
    [0.269746035, 0.9629315],
    [-0.7306287, -0.682774961],
    [-0.7590952, -0.650979638],
    [-0.9070538, 0.4210146],
    [-0.5104861, -0.859886],
    [0.861335039, 0.5080373],
    [0.500788152, -0.8655699],
    [-0.6541582, 0.7563578],
    [-0.838275552, -0.54524684],
    [0.6940071, 0.7199682],
    [0.06950936, 0.9975813],
    [0.170294225, -0.9853933],
    [0.269597322, 0.9629731],
    [0.551961243, -0.833869755],
    [0.2256575, -0.9742067],
    [0.421526283, -0.9068162],
    [0.488187343, -0.872738838],
    [-0.3683855, -0.929673135],
    [-0.982539058, 0.18605645],
    [0.812564731, 0.582871],
    [0.3196461, -0.947537],
    [0.9570914, 0.289786249],
    [-0.6876655, -0.7260276],
    [-0.9988771, -0.04737673],
    [-0.1250179, 0.9921545],
    [-0.828013361, 0.560708344],
    [0.932486355, -0.361205131],
    [0.639465332, 0.7688199],
    [-0.0162384715, -0.999868155],
    [-0.995501459, -0.0947461352],
    [-0.8145332, 0.580117],
    [0.4037328, -0.914876938],
    [0.9944263, 0.10543368],
    [-0.16247116, 0.9867133],
    [-0.9949488, -0.100383878],
    [-0.699530244, 0.714603],
    [0.5263415, -0.850273252],
    [-0.5395222, 0.8419714],
    [0.65793705, 0.7530729],
    [0.014267588, -0.9998982],
    [-0.6734384, 0.7392433],
    [0.6394121, -0.7688642],
    [0.9211571, 0.389190853],
    [-0.146637216, -0.98919034],
    [-0.7823181, 0.6228791],
    [-0.5039611, -0.8637264],
    [-0.774312, -0.632804],
];

/// Near-unit 3D vectors for cellular feature points and gradient perturbation.
#[rustfmt::skip]
pub const CELL_3D: [[f32; 3]; 256] = [
    [-0.7292737, -0.661843956, 0.17355819],
    [0.7902921, -0.5480887, -0.2739291],
    [0.7217579, 0.622621238, -0.3023381],
    [0.5656831, -0.8208298, -0.079000026],
    [0.760049045, -0.555597961, -0.337099969],
    [0.371394575, 0.501126468, 0.78162545],
    [-0.127706245, -0.4254439, -0.8959289],
    [-0.2881561, -0.5815839, 0.7607406],
    [0.5849561, -0.6628202, -0.4674352],
    [0.330717117, 0.0391653739, 0.94291687],
    [0.8712122, -0.411337435, -0.267938167],
    [0.580981, 0.7021916, 0.411567777],
    [0.5037569, 0.6330057, -0.5878204],
    [0.449371219, 0.6013902, 0.6606023],
    [-0.6878404, 0.0901889056, -0.7202372],
    [-0.595895648, -0.646935046, 0.475797653],
    [-0.5127052, 0.1946922, -0.836198747],
    [-0.991150737, -0.0541027635, -0.121215314],
    [-0.214972109, 0.9720882, -0.09397608],
    [-0.7518651, -0.542805731, 0.374246955],
    [0.5237069, 0.8516377, -0.0210781787],
    [0.6333505, 0.192616716, -0.749510467],
    [-0.06788242, 0.39983058, 0.9140719],
    [-0.55386287, -0.472989678, -0.6852129],
    [-0.726145566, -0.5911991, 0.350993335],
    [-0.9229275, -0.178280875, 0.341204941],
    [-0.6968815, 0.651127458, 0.300648034],
    [0.960804462, -0.209836319, -0.18117249],
    [0.0681714639, -0.9743405, 0.214506909],
    [-0.3577285, -0.6697087, -0.650784552],
    [-0.186862111, 0.7648617, -0.616497457],
    [-0.654169738, 0.3967915, 0.643908739],
    [0.699334, -0.6164538, 0.361823916],
    [-0.154666573, 0.6291284, 0.7617583],
    [-0.6841613, -0.2580482, -0.682154238],
    [0.5383981, 0.4258655, 0.727163],
    [-0.5026988, -0.7939833, -0.3418837],
    [0.320297182, 0.283441544, 0.9039196],
    [0.86832273, -0.000376265642, -0.495999515],
    [0.791120052, -0.0851104558, 0.605710566],
    [-0.04011016, -0.439724863, 0.8972364],
    [0.914512, 0.357934624, -0.188548759],
    [-0.961203933, -0.275648415, 0.0102466689],
    [0.651036143, -0.287779927, -0.702377856],
    [-0.204178631, 0.736523747, 0.6448596],
    [-0.7718264, 0.379062682, 0.5104856],
    [-0.306008279, -0.7692988, 0.56083715],
    [0.454007328, -0.5024843, 0.735789955],
    [0.481679559, 0.6021208, -0.636738],
    [0.696198046, -0.322219729, 0.6414692],
    [-0.653216064, -0.6781149, 0.336851567],
    [0.508930147, -0.615466237, -0.601823449],
    [-0.163591981, -0.9133605, -0.372840881],
    [0.5240802, -0.8437664, 0.115750588],
    [0.5902587, 0.4983818, -0.634988368],
    [0.5863228, 0.494764745, 0.6414308],
    [0.6779335, 0.234134525, 0.6968409],
    [0.7177054, -0.685897946, 0.120178632],
    [-0.532882, -0.5205125, 0.6671608],
    [-0.8654874, -0.07007271, -0.4960054],
    [-0.286181, 0.795208931, 0.534549534],
    [-0.0484952964, 0.981083632, -0.187411562],
    [-0.635852158, 0.605834842, 0.478180021],
    [0.62547946, -0.286161959, 0.725869656],
    [-0.258526, 0.506194949, -0.8227582],
    [0.0213630684, 0.506401658, -0.862033],
    [0.200111777, 0.859926343, 0.46955505],
    [0.474356145, 0.6014985, -0.6427953],
    [0.6622994, -0.520247459, -0.539168],
    [0.08084973, -0.653272033, 0.7527941],
    [-0.6893687, 0.0592860356, 0.7219805],
    [-0.112188712, -0.967318535, 0.227395251],
    [0.7344116, 0.59796685, -0.3210533],
    [0.5789393, -0.248884976, 0.776457],
    [0.698818266, 0.355716974, -0.6205791],
    [-0.863684535, -0.274877131, -0.4224826],
    [-0.4247028, -0.464088082, 0.777335048],
    [0.5257723, -0.842701733, 0.115832992],
    [0.934383035, 0.316302478, -0.163954392],
    [-0.101683639, -0.8057303, -0.583488762],
    [-0.6529239, 0.506021261, -0.5635893],
    [-0.246528611, -0.9668206, -0.06694497],
    [-0.9776897, -0.209925056, -0.00736882538],
    [0.7736893, 0.573424459, 0.2694238],
    [-0.6095088, 0.4995679, 0.6155737],
    [0.5794535, 0.7434547, 0.333929241],
    [-0.8226211, 0.0814258158, 0.562729359],
    [-0.510385454, 0.470366776, 0.719904],
    [-0.5764972, -0.0723165646, -0.813892663],
    [0.7250629, 0.39499715, -0.56414634],
    [-0.1525424, 0.486084074, -0.8604958],
    [-0.55509764, -0.495782077, 0.6678823],
    [-0.188361436, 0.914586961, 0.35784173],
    [0.762555659, -0.541440845, -0.354048967],
    [-0.5870232, -0.3226498, -0.7424964],
    [0.305112422, 0.2262544, -0.9250488],
    [0.637957633, 0.577242434, -0.509707034],
    [-0.5966776, 0.145485237, -0.7891831],
    [-0.65833056, 0.655548751, -0.369941473],
    [0.743489265, 0.235108465, 0.6260573],
    [0.5562114, 0.826436043, -0.08736329],
    [-0.302894, -0.8251527, 0.476841927],
    [0.112934381, -0.9858884, -0.123571075],
    [0.5937653, -0.5896814, 0.5474657],
    [0.6757964, -0.583575845, -0.450264841],
    [0.7242303, -0.115271978, 0.679855049],
    [-0.9511914, 0.0753624, -0.299258083],
    [0.2539471, -0.188633934, 0.9486454],
    [0.5714336, -0.167945087, -0.8032796],
    [-0.06778235, 0.39782694, 0.9149532],
    [0.6074973, 0.73306, -0.305892259],
    [-0.543547869, 0.167582244, 0.8224791],
    [-0.5876678, -0.3380045, -0.7351187],
    [-0.796756268, 0.0409782268, -0.602909863],
    [-0.199635088, 0.8706295, 0.4496111],
    [-0.0278766025, -0.910623252, -0.4122962],
    [-0.7797626, -0.6257635, 0.0197577551],
    [-0.5211233, 0.740164459, -0.424955457],
    [0.8575425, 0.4053273, -0.316750169],
    [0.104522333, 0.8390196, -0.533967435],
    [0.3501823, 0.9242524, -0.152085021],
    [0.198784992, 0.0764761344, 0.9770547],
    [0.784599662, 0.6066257, -0.128096417],
    [0.09006737, -0.975098968, -0.20265691],
    [-0.827434361, -0.542299569, 0.145820364],
    [-0.348579764, -0.41580227, 0.8400004],
    [-0.2471779, -0.730482, -0.6366311],
    [-0.3700155, 0.8577948, 0.356758446],
    [0.591339469, -0.548311949, -0.591330349],
    [0.120487355, -0.7626472, -0.6354935],
    [0.6169593, 0.03079648, 0.7863923],
    [0.12581569, -0.664083, -0.73699677],
    [-0.6477565, -0.174014732, -0.741707742],
    [0.6217889, -0.7804431, -0.06547655],
    [0.6589943, -0.6096988, 0.44044736],
    [-0.268983752, -0.6732403, -0.688763559],
    [-0.38497752, 0.567654252, 0.7277094],
    [0.57544446, 0.811047137, -0.105196349],
    [0.914159358, 0.3832948, 0.131900564],
    [-0.107925318, 0.9245494, 0.365459353],
    [0.3779771, 0.304314882, 0.874371648],
    [-0.214288518, -0.8259286, 0.5214617],
    [0.580254436, 0.414809853, -0.7008834],
    [-0.198266089, 0.856716156, -0.476159662],
    [-0.0338155366, 0.377318084, -0.9254661],
    [-0.686792254, -0.6656598, 0.29191336],
    [0.7731743, -0.287579358, -0.565243],
    [-0.09655942, 0.91937083, -0.3813575],
    [0.271570235, -0.957791, -0.09426606],
    [0.245101571, -0.6917999, -0.6792188],
    [0.97770077, -0.175385535, 0.115503654],
    [-0.522474, 0.8521607, 0.0290361587],
    [-0.773488045, -0.526129246, 0.353417963],
    [-0.71344924, -0.269547254, 0.6467878],
    [0.164403722, 0.5105846, -0.843963742],
    [0.6494636, 0.0558561124, 0.7583384],
    [-0.4711971, 0.501728058, -0.7254256],
    [-0.633576453, -0.238168627, -0.7361091],
    [-0.9021533, -0.2709478, -0.335718185],
    [-0.3793711, 0.8722581, 0.3086152],
    [-0.685559869, -0.325014323, 0.6514394],
    [0.290094227, -0.7799058, -0.5546101],
    [-0.209831938, 0.8503707, 0.482535154],
    [-0.459260374, 0.6598504, -0.5947077],
    [0.871594548, 0.09616365, -0.480703115],
    [-0.6776666, 0.711850464, -0.1844907],
    [0.7044378, 0.3124276, 0.637304],
    [-0.7052319, -0.240109324, -0.6670798],
    [0.0819210038, -0.720733643, -0.688354552],
    [-0.6993681, -0.5875763, -0.4069869],
    [-0.128145441, 0.6419896, 0.755928636],
    [-0.6337388, -0.678547144, -0.3714147],
    [0.5565052, -0.216888756, -0.8020357],
    [-0.579155445, 0.7244372, -0.3738579],
    [0.11757791, -0.7096451, 0.69467926],
    [-0.613462, 0.132363111, 0.7785528],
    [0.698463559, -0.0298051629, -0.7150247],
    [0.831808269, -0.3930172, 0.391959757],
    [0.146957636, 0.055416517, -0.98758924],
    [0.708868563, -0.2690504, 0.652010143],
    [0.27260533, 0.67369765, -0.686889946],
    [-0.65912956, 0.303545862, -0.688046634],
    [0.481513143, -0.752827, 0.4487723],
    [0.943001, 0.167564735, -0.287526131],
    [0.434802949, 0.7695305, -0.46772778],
    [0.393199623, 0.5944736, 0.701423645],
    [0.725433648, -0.603925645, 0.330181479],
    [0.759023547, -0.6506083, 0.0243331324],
    [-0.8552769, -0.3430043, 0.388393581],
    [-0.6139747, 0.6981725, 0.368225753],
    [-0.746590555, -0.575201, 0.334284931],
    [0.5730066, 0.8105555, -0.121091679],
    [-0.922587752, -0.3475211, -0.167514041],
    [-0.71058166, -0.471969217, -0.5218417],
    [-0.0856461, 0.358300149, 0.9296697],
    [-0.8279698, -0.2043157, 0.5222271],
    [0.427944034, 0.278166, 0.8599346],
    [0.539908, -0.785712063, -0.3019204],
    [0.5678404, -0.5495414, -0.612830758],
    [-0.9896071, 0.136563912, -0.0450341851],
    [-0.6154343, -0.644087553, 0.454303741],
    [0.107420437, -0.794634044, 0.597509444],
    [-0.359545, -0.888553, 0.284957826],
    [-0.218040526, 0.1529889, 0.9638738],
    [-0.7277432, -0.61640507, -0.300723463],
    [0.7249729, -0.00669719465, 0.688744843],
    [-0.5553659, -0.5336586, 0.6377908],
    [0.5137558, 0.797620833, -0.316],
    [-0.3794025, 0.924560845, -0.0352275148],
    [0.822924852, 0.27453658, -0.497417659],
    [-0.5404114, 0.60911417, 0.5804614],
    [0.8036582, -0.270302951, 0.5301602],
    [0.604431868, 0.683296859, 0.409594327],
    [0.06389989, 0.965820849, -0.2512108],
    [0.108711332, 0.74024713, -0.6634878],
    [-0.7134277, -0.6926784, 0.105912849],
    [0.645889759, -0.57245487, -0.50509584],
    [-0.6553931, 0.73814714, 0.159995615],
    [0.391096145, 0.918887138, -0.05186756],
    [-0.487902254, -0.5904377, 0.642911136],
    [0.601479, 0.770744145, -0.210182011],
    [-0.5677173, 0.7511361, 0.336885184],
    [0.7858574, 0.226674661, 0.5753667],
    [-0.452034563, -0.6042227, -0.656185746],
    [0.00227211625, 0.4132844, -0.9105992],
    [-0.581575155, -0.5162926, 0.6286591],
    [-0.03703705, 0.8273786, 0.5604221],
    [-0.511969268, 0.795354366, -0.324498],
    [-0.268241733, -0.957229, -0.10843876],
    [-0.232248276, -0.9679131, -0.09594243],
    [0.3554329, -0.8881506, 0.291300625],
    [0.734652042, -0.4371373, 0.5188423],
    [0.998512, 0.0465901121, -0.0283394456],
    [-0.37276876, -0.9082481, 0.190075725],
    [0.9173738, -0.3483642, 0.192529842],
    [0.2714911, 0.41475296, -0.868488669],
    [0.5131763, -0.711633444, 0.4798207],
    [-0.873735368, 0.188869923, -0.448235065],
    [0.846004367, -0.3725218, 0.38145],
    [0.897872746, -0.178020909, -0.402657539],
    [0.217806563, -0.9698323, -0.109478951],
    [-0.151803136, -0.7788918, -0.6085091],
    [-0.2600385, -0.4755398, -0.840382],
    [0.5723135, -0.7474341, -0.337341845],
    [-0.7174141, 0.169901714, -0.675611138],
    [-0.6841808, 0.0214570761, -0.728996754],
    [-0.2007448, 0.06555606, -0.9774477],
    [-0.114880368, -0.8044887, 0.5827524],
    [-0.787035, 0.03447489, 0.6159443],
    [-0.201559648, 0.685987234, 0.699138939],
    [-0.0858108252, -0.10920836, -0.990308046],
    [0.5532693, 0.732525051, -0.396610767],
    [-0.184248939, -0.9777375, -0.100407675],
    [0.07754738, -0.9111506, 0.404711038],
    [0.139983848, 0.7601631, -0.634473443],
    [0.448441923, -0.84528923, 0.290492535],
];

/// 4D simplex corner ordering, indexed by a shifted comparison mask.
#[rustfmt::skip]
pub const SIMPLEX_4D: [u8; 256] = [
    0, 1, 2, 3, 0, 1, 3, 2, 0, 0, 0, 0, 0, 2, 3, 1,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 2, 3, 0,
    0, 2, 1, 3, 0, 0, 0, 0, 0, 3, 1, 2, 0, 3, 2, 1,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 3, 2, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    1, 2, 0, 3, 0, 0, 0, 0, 1, 3, 0, 2, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 2, 3, 0, 1, 2, 3, 1, 0,
    1, 0, 2, 3, 1, 0, 3, 2, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 2, 0, 3, 1, 0, 0, 0, 0, 2, 1, 3, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    2, 0, 1, 3, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    3, 0, 1, 2, 3, 0, 2, 1, 0, 0, 0, 0, 3, 1, 2, 0,
    2, 1, 0, 3, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    3, 1, 0, 2, 0, 0, 0, 0, 3, 2, 0, 1, 3, 2, 1, 0,
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_vectors_near_unit_length() {
        for [x, y] in CELL_2D {
            let len = (x * x + y * y).sqrt();
            assert!((len - 1.0).abs() < 1e-3, "2D cell vector length {}", len);
        }
        for [x, y, z] in CELL_3D {
            let len = (x * x + y * y + z * z).sqrt();
            assert!((len - 1.0).abs() < 1e-3, "3D cell vector length {}", len);
        }
    }

    #[test]
    fn test_simplex_4d_entries_are_corner_ranks() {
        assert!(SIMPLEX_4D.iter().all(|&v| v <= 3));
        // Each populated 4-entry row is a permutation of 0..=3.
        for row in SIMPLEX_4D.chunks(4) {
            if row.iter().any(|&v| v != 0) {
                let mut sorted = row.to_vec();
                sorted.sort_unstable();
                assert_eq!(sorted, vec![0, 1, 2, 3]);
            }
        }
    }
}
